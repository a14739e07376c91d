// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::RecordSource;
use crate::config::AppConfig;
use crate::forms::PaymentReceiptForm;
use anyhow::Result;
use chrono::Utc;
use tracing::{error, info};

pub fn handle(src: &dyn RecordSource, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let status = add(src, cfg, sub)?;
            println!("{}", status);
        }
        _ => {}
    }
    Ok(())
}

/// Validates and submits a receipt. Invalid input is an error; a failed
/// request is reported in the returned status line.
pub fn add(src: &dyn RecordSource, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<String> {
    let get = |name: &str| {
        sub.get_one::<String>(name)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };
    let form = PaymentReceiptForm {
        receipt_no: get("receipt-no"),
        invoice_number: get("invoice"),
        amount: get("amount"),
        payment_mode: get("mode"),
        payment_date: sub
            .get_one::<String>("date")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| Utc::now().date_naive().to_string()),
    };
    let payment = form.to_payment(cfg)?;
    match src.submit_payment(&payment) {
        Ok(()) => {
            info!(receipt = %payment.receipt_no, invoice = %payment.invoice_number, "payment recorded");
            Ok(format!(
                "Recorded receipt {} of {:.2} ({}) against {}",
                payment.receipt_no, payment.amount, payment.payment_mode, payment.invoice_number
            ))
        }
        Err(e) => {
            error!(error = %e, receipt = %payment.receipt_no, "payment submission failed");
            Ok(e.status_message())
        }
    }
}
