// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use solarbooks::config::AppConfig;
use solarbooks::models::{EntryKind, Transaction};
use solarbooks::pagination::PageItem;
use solarbooks::{cli, commands::transactions};

fn setup() -> Vec<Transaction> {
    (1..=25)
        .map(|i| Transaction {
            code: format!("TXN-{:03}", i),
            date: format!("2025-01-{:02}", i),
            from_account: if i % 2 == 0 { "RUPA CA".into() } else { String::new() },
            to_account: if i % 2 == 1 { "HDFC CA".into() } else { String::new() },
            cd: if i % 2 == 1 { EntryKind::Credit } else { EntryKind::Debit },
            main_header: "Customer Receipt".into(),
            sub_header: String::new(),
            amount: Decimal::from(i * 100),
            generated_by: "admin".into(),
            is_verified: i <= 10,
            is_deleted: i == 25,
        })
        .collect()
}

fn with_list<F: FnOnce(&clap::ArgMatches)>(args: &[&str], f: F) {
    let mut argv = vec!["solarbooks", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            f(list_m);
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_pages_and_skips_deleted() {
    let txs = setup();
    let cfg = AppConfig::default();
    with_list(&["--page", "3"], |m| {
        let page = transactions::query_page(&txs, &cfg, m).unwrap();
        assert_eq!(page.total_rows, 24);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.rows.len(), 4);
        assert_eq!(page.rows[0].code, "TXN-021");
        assert_eq!(page.pages, vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]);
    });
}

#[test]
fn out_of_range_page_stays_on_first() {
    let txs = setup();
    let cfg = AppConfig::default();
    with_list(&["--page", "9", "--page-size", "5"], |m| {
        let page = transactions::query_page(&txs, &cfg, m).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 5);
        assert_eq!(page.rows[0].code, "TXN-001");
        assert_eq!(page.total_pages, 5);
    });
}

#[test]
fn filters_combine_and_summary_covers_all_pages() {
    let txs = setup();
    let cfg = AppConfig::default();
    with_list(
        &["--type", "debit", "--verified", "yes", "--account", " RUPA CA ", "--page-size", "2"],
        |m| {
            let page = transactions::query_page(&txs, &cfg, m).unwrap();
            // debits 2,4,6,8,10
            assert_eq!(page.total_rows, 5);
            assert_eq!(page.rows.len(), 2);
            assert_eq!(page.summary.total_debit, Decimal::from(3000));
            assert_eq!(page.summary.total_credit, Decimal::ZERO);
            assert_eq!(page.summary.net, Decimal::from(-3000));
        },
    );
}

#[test]
fn include_deleted_brings_rows_back() {
    let txs = setup();
    let cfg = AppConfig::default();
    with_list(&["--include-deleted", "--code", "txn-02"], |m| {
        let page = transactions::query_page(&txs, &cfg, m).unwrap();
        assert_eq!(page.total_rows, 6);
    });
}

#[test]
fn bad_date_is_rejected() {
    let txs = setup();
    let cfg = AppConfig::default();
    with_list(&["--from", "01-01-2025"], |m| {
        let err = transactions::query_page(&txs, &cfg, m).unwrap_err();
        assert!(err.to_string().contains("expected YYYY-MM-DD"));
    });
}

#[test]
fn page_bar_marks_current() {
    let bar = transactions::page_bar(
        &solarbooks::pagination::page_numbers(5, 10),
        5,
    );
    assert_eq!(bar, "1 ... 4 [5] 6 ... 10");
}
