// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client-side paging over an already filtered list.

use serde::Serialize;
use std::ops::Range;

/// Above this many pages the page list is compressed with ellipses.
pub const MAX_PLAIN_PAGES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

// Pages go out as numbers and the gap as "...", the way the page bar renders them.
impl Serialize for PageItem {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => s.serialize_u64(*n as u64),
            PageItem::Ellipsis => s.serialize_str("..."),
        }
    }
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => write!(f, "..."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    current: usize,
    page_size: usize,
    total_items: usize,
}

impl Pager {
    /// A page size of zero is treated as one.
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Moves to `page` if it lies in `[1, total_pages]`; otherwise nothing changes.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(p) => self.go_to(p),
            None => false,
        }
    }

    pub fn bounds(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let r = self.bounds();
        let end = r.end.min(items.len());
        &items[r.start.min(end)..end]
    }

    pub fn page_numbers(&self) -> Vec<PageItem> {
        page_numbers(self.current, self.total_pages())
    }
}

pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages <= MAX_PLAIN_PAGES {
        return (1..=total_pages).map(Page).collect();
    }
    let n = total_pages;
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(n - 1), Page(n)]
    } else if current >= n - 2 {
        vec![Page(1), Page(2), Ellipsis, Page(n - 2), Page(n - 1), Page(n)]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(n),
        ]
    }
}
