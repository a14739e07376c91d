// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::RecordSource;
use crate::commands::{fetched, quote::breakdown_table};
use crate::forms::GstInvoiceForm;
use crate::ledger::{AmountDue, amount_due};
use crate::models::{GstInvoice, InvoiceStatus, Proforma};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};
use chrono::Utc;
use tracing::{error, info, warn};

pub fn handle(src: &dyn RecordSource, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(src, sub)?,
        Some(("due", sub)) => due(src, sub)?,
        Some(("gst", sub)) => gst(src, sub)?,
        _ => {}
    }
    Ok(())
}

fn find<'a>(proformas: &'a [Proforma], invoice_number: &str) -> Result<&'a Proforma> {
    proformas
        .iter()
        .find(|p| p.invoice_number == invoice_number)
        .ok_or_else(|| anyhow!("Invoice '{}' not found", invoice_number))
}

fn list(src: &dyn RecordSource, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let status = match sub.get_one::<String>("status") {
        Some(s) => Some(s.parse::<InvoiceStatus>().map_err(|e| anyhow!(e))?),
        None => None,
    };
    let Some(proformas) = fetched(src.proformas(), "proformas") else {
        return Ok(());
    };
    let data: Vec<&Proforma> = proformas
        .iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .collect();
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No data found");
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|p| {
            vec![
                p.invoice_number.clone(),
                p.client_id.clone(),
                p.system_type.clone(),
                fmt_money(&p.total_project_value),
                p.status.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Invoice", "Client", "System", "Project Value", "Status"], rows)
    );
    Ok(())
}

pub fn query_due(src: &dyn RecordSource, invoice_number: &str) -> Result<Option<AmountDue>> {
    let Some(proformas) = fetched(src.proformas(), "proformas") else {
        return Ok(None);
    };
    let Some(payments) = fetched(src.payments(), "payments") else {
        return Ok(None);
    };
    let p = find(&proformas, invoice_number)?;
    let due = amount_due(p, &payments);
    if due.due.is_sign_negative() {
        warn!(invoice = %due.invoice_number, due = %due.due, "amount due is negative");
    }
    Ok(Some(due))
}

fn due(src: &dyn RecordSource, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let invoice = sub.get_one::<String>("invoice").unwrap().trim();
    let Some(d) = query_due(src, invoice)? else {
        return Ok(());
    };
    if !maybe_print_json(json_flag, jsonl_flag, &d)? {
        println!(
            "{}",
            pretty_table(
                &["Invoice", "Project Value", "Paid", "Discounts", "Total Amount Due"],
                vec![vec![
                    d.invoice_number.clone(),
                    fmt_money(&d.total),
                    fmt_money(&d.paid),
                    fmt_money(&d.discounts),
                    fmt_money(&d.due),
                ]],
            )
        );
    }
    Ok(())
}

/// Builds the GST invoice for `invoice gst`. `None` when the proformas
/// could not be fetched; the status has already been shown.
pub fn prepare_gst(
    src: &dyn RecordSource,
    sub: &clap::ArgMatches,
) -> Result<Option<(GstInvoiceForm, GstInvoice)>> {
    let invoice = sub.get_one::<String>("invoice").unwrap().trim();
    let Some(proformas) = fetched(src.proformas(), "proformas") else {
        return Ok(None);
    };
    let p = find(&proformas, invoice)?;

    let mut form = GstInvoiceForm::from_proforma(p);
    form.gst_invoice_number = sub.get_one::<String>("gst-number").unwrap().trim().to_string();
    form.invoice_date = match sub.get_one::<String>("date") {
        Some(d) => d.trim().to_string(),
        None => Utc::now().date_naive().to_string(),
    };
    if let Some(pct) = sub.get_one::<String>("supply") {
        form.set_supply_percentage(pct)?;
    }
    let gst_invoice = form.to_gst_invoice()?;
    Ok(Some((form, gst_invoice)))
}

/// Sends the invoice and returns the line to show the user.
pub fn submit_gst(src: &dyn RecordSource, gst_invoice: &GstInvoice) -> String {
    match src.submit_gst_invoice(gst_invoice) {
        Ok(()) => {
            info!(gst_invoice = %gst_invoice.gst_invoice_number, "GST invoice submitted");
            format!("GST invoice {} submitted", gst_invoice.gst_invoice_number)
        }
        Err(e) => {
            error!(error = %e, "GST invoice submission failed");
            e.status_message()
        }
    }
}

fn gst(src: &dyn RecordSource, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let Some((form, gst_invoice)) = prepare_gst(src, sub)? else {
        return Ok(());
    };

    if !maybe_print_json(json_flag, jsonl_flag, &gst_invoice)? {
        println!(
            "GST invoice {} for {} ({} kW)",
            gst_invoice.gst_invoice_number,
            gst_invoice.invoice_number,
            form.rating().total_kw()
        );
        println!("{}", breakdown_table(&gst_invoice.breakdown));
    }

    if sub.get_flag("submit") {
        println!("{}", submit_gst(src, &gst_invoice));
    }
    Ok(())
}
