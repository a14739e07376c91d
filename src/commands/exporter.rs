// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::RecordSource;
use crate::commands::fetched;
use crate::commands::transactions::{TransactionRow, filter_from_args};
use crate::ledger::filter_transactions;
use anyhow::{Result, anyhow};

pub fn handle(src: &dyn RecordSource, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(src, sub),
        _ => Ok(()),
    }
}

fn export_transactions(src: &dyn RecordSource, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }
    let filter = filter_from_args(sub)?;
    let Some(txs) = fetched(src.transactions(), "transactions") else {
        return Ok(());
    };
    let rows: Vec<TransactionRow> = filter_transactions(&txs, &filter)
        .into_iter()
        .map(TransactionRow::from)
        .collect();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
