// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::RecordSource;
use crate::commands::fetched;
use crate::config::AppConfig;
use crate::ledger::{AccountBalance, account_balances};
use crate::models::Transaction;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(src: &dyn RecordSource, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balances", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let Some(txs) = fetched(src.transactions(), "transactions") else {
                return Ok(());
            };
            let data = balances(&txs, cfg, sub);
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                let rows = data
                    .iter()
                    .map(|b| {
                        vec![
                            b.account.clone(),
                            fmt_money(&b.credit),
                            fmt_money(&b.debit),
                            fmt_money(&b.balance),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Account", "Credit", "Debit", "Balance"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

/// Balances for `--name` accounts, or every configured account when none are given.
pub fn balances(
    txs: &[Transaction],
    cfg: &AppConfig,
    sub: &clap::ArgMatches,
) -> Vec<AccountBalance> {
    let names: Vec<String> = match sub.get_many::<String>("name") {
        Some(v) => v.map(|s| s.trim().to_string()).collect(),
        None => cfg.accounts.clone(),
    };
    account_balances(txs, &names)
}
