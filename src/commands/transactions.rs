// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::RecordSource;
use crate::commands::fetched;
use crate::config::AppConfig;
use crate::ledger::{LedgerSummary, TransactionFilter, build_report};
use crate::models::{EntryKind, Transaction};
use crate::pagination::{PageItem, Pager};
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use serde::Serialize;
use tracing::warn;

pub fn handle(src: &dyn RecordSource, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(src, cfg, sub)?,
        Some(("summary", sub)) => summary(src, sub)?,
        _ => {}
    }
    Ok(())
}

fn opt(sub: &clap::ArgMatches, name: &str) -> Option<String> {
    sub.get_one::<String>(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    let date_from = opt(sub, "from");
    let date_to = opt(sub, "to");
    for d in date_from.iter().chain(date_to.iter()) {
        parse_date(d)?;
    }
    let kind = sub.get_one::<String>("type").map(|t| match t.as_str() {
        "credit" => EntryKind::Credit,
        "debit" => EntryKind::Debit,
        _ => EntryKind::SelfTransfer,
    });
    let verified = sub.get_one::<String>("verified").map(|v| v == "yes");
    let deleted = if sub.get_flag("include-deleted") {
        None
    } else {
        Some(false)
    };
    Ok(TransactionFilter {
        account: opt(sub, "account"),
        main_header: opt(sub, "head"),
        sub_header: opt(sub, "sub-head"),
        code: opt(sub, "code"),
        date_from,
        date_to,
        kind,
        verified,
        deleted,
    })
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub code: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub kind: String,
    pub head: String,
    pub sub_head: String,
    pub amount: String,
    pub verified: bool,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        TransactionRow {
            code: t.code.clone(),
            date: t.date.clone(),
            from: t.from_account.clone(),
            to: t.to_account.clone(),
            kind: t.cd.label().to_string(),
            head: t.main_header.clone(),
            sub_head: t.sub_header.clone(),
            amount: fmt_money(&t.amount),
            verified: t.is_verified,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionPage {
    pub rows: Vec<TransactionRow>,
    pub summary: LedgerSummary,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub pages: Vec<PageItem>,
}

pub fn query_page(
    txs: &[Transaction],
    cfg: &AppConfig,
    sub: &clap::ArgMatches,
) -> Result<TransactionPage> {
    let filter = filter_from_args(sub)?;
    let report = build_report(txs, &filter);
    let page_size = sub
        .get_one::<usize>("page-size")
        .copied()
        .unwrap_or(cfg.page_size);
    let mut pager = Pager::new(report.rows.len(), page_size);
    let wanted = *sub.get_one::<usize>("page").unwrap_or(&1);
    if !pager.go_to(wanted) && wanted != pager.current() {
        warn!(
            page = wanted,
            total_pages = pager.total_pages(),
            "page out of range, staying on page {}",
            pager.current()
        );
    }
    Ok(TransactionPage {
        rows: pager
            .slice(&report.rows)
            .iter()
            .map(|t| TransactionRow::from(*t))
            .collect(),
        summary: report.summary,
        page: pager.current(),
        page_size: pager.page_size(),
        total_pages: pager.total_pages(),
        total_rows: pager.total_items(),
        pages: pager.page_numbers(),
    })
}

fn list(src: &dyn RecordSource, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(txs) = fetched(src.transactions(), "transactions") else {
        return Ok(());
    };
    let page = query_page(&txs, cfg, sub)?;
    if jsonl_flag {
        maybe_print_json(false, true, &page.rows)?;
        return Ok(());
    }
    if maybe_print_json(json_flag, false, &page)? {
        return Ok(());
    }
    if page.rows.is_empty() {
        println!("No data found");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|r| {
            vec![
                r.code.clone(),
                r.date.clone(),
                r.from.clone(),
                r.to.clone(),
                r.kind.clone(),
                r.head.clone(),
                r.sub_head.clone(),
                r.amount.clone(),
                if r.verified { "yes".into() } else { "no".into() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Code", "Date", "From", "To", "C/D", "Head", "Sub-head", "Amount", "Verified"],
            rows,
        )
    );
    println!("{}", summary_table(&page.summary));
    println!(
        "Page {} of {} ({} rows): {}",
        page.page,
        page.total_pages,
        page.total_rows,
        page_bar(&page.pages, page.page)
    );
    Ok(())
}

fn summary(src: &dyn RecordSource, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some(txs) = fetched(src.transactions(), "transactions") else {
        return Ok(());
    };
    let filter = filter_from_args(sub)?;
    let report = build_report(&txs, &filter);
    if !maybe_print_json(json_flag, jsonl_flag, &report.summary)? {
        println!("{}", summary_table(&report.summary));
    }
    Ok(())
}

pub fn summary_table(s: &LedgerSummary) -> comfy_table::Table {
    pretty_table(
        &["", "Count", "Amount"],
        vec![
            vec![
                "Credit".into(),
                s.credit_count.to_string(),
                fmt_money(&s.total_credit),
            ],
            vec![
                "Debit".into(),
                s.debit_count.to_string(),
                fmt_money(&s.total_debit),
            ],
            vec!["Net".into(), String::new(), fmt_money(&s.net)],
            vec![
                "CD (loan/self)".into(),
                s.self_transfer_count.to_string(),
                fmt_money(&s.total_self_transfer),
            ],
        ],
    )
}

pub fn page_bar(pages: &[PageItem], current: usize) -> String {
    pages
        .iter()
        .map(|p| match p {
            PageItem::Page(n) if *n == current => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
