// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use solarbooks::config::AppConfig;
use solarbooks::models::{EntryKind, Transaction};
use solarbooks::{cli, commands::accounts};

fn tx(code: &str, from: &str, to: &str, cd: EntryKind, amt: &str) -> Transaction {
    Transaction {
        code: code.into(),
        date: "2025-04-01".into(),
        from_account: from.into(),
        to_account: to.into(),
        cd,
        main_header: "Office Expense".into(),
        sub_header: String::new(),
        amount: Decimal::from_str_exact(amt).unwrap(),
        generated_by: "admin".into(),
        is_verified: false,
        is_deleted: false,
    }
}

fn setup() -> Vec<Transaction> {
    let mut v = vec![
        tx("TXN-001", "", "HDFC CA", EntryKind::Credit, "50000"),
        tx("TXN-002", "RUPA CA", "", EntryKind::Debit, "192"),
        tx("TXN-003", "RUPA CA", "", EntryKind::Debit, "232"),
        tx("TXN-004", "", "RUPA CA", EntryKind::Credit, "1000"),
        tx("LN-005", "HDFC CA", "CASH", EntryKind::SelfTransfer, "10000"),
    ];
    v[3].is_deleted = true;
    v
}

fn with_balances<F: FnOnce(&clap::ArgMatches)>(args: &[&str], f: F) {
    let mut argv = vec!["solarbooks", "account", "balances"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("account", account_m)) = matches.subcommand() {
        if let Some(("balances", balances_m)) = account_m.subcommand() {
            f(balances_m);
        } else {
            panic!("no balances subcommand");
        }
    } else {
        panic!("no account subcommand");
    }
}

#[test]
fn named_account_balance_counts_deleted_rows() {
    let txs = setup();
    let cfg = AppConfig::default();
    with_balances(&["--name", "RUPA CA"], |m| {
        let data = accounts::balances(&txs, &cfg, m);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].account, "RUPA CA");
        assert_eq!(data[0].debit, Decimal::from(424));
        assert_eq!(data[0].credit, Decimal::from(1000));
        assert_eq!(data[0].balance, Decimal::from(576));
    });
}

#[test]
fn repeated_names_keep_their_order() {
    let txs = setup();
    let cfg = AppConfig::default();
    with_balances(&["--name", " HDFC CA ", "--name", "CASH"], |m| {
        let data = accounts::balances(&txs, &cfg, m);
        let names: Vec<&str> = data.iter().map(|b| b.account.as_str()).collect();
        assert_eq!(names, ["HDFC CA", "CASH"]);
        assert_eq!(data[0].balance, Decimal::from(40000));
        assert_eq!(data[1].balance, Decimal::from(10000));
    });
}

#[test]
fn configured_accounts_are_the_default() {
    let txs = setup();
    let cfg = AppConfig {
        accounts: vec!["SBI CA".into(), "RUPA CA".into()],
        ..AppConfig::default()
    };
    with_balances(&[], |m| {
        let data = accounts::balances(&txs, &cfg, m);
        let names: Vec<&str> = data.iter().map(|b| b.account.as_str()).collect();
        assert_eq!(names, ["SBI CA", "RUPA CA"]);
        assert_eq!(data[0].balance, Decimal::ZERO);
        assert_eq!(data[1].balance, Decimal::from(576));
    });
}
