// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::forms::{CustomerKind, ProformaForm, SystemRating};
use crate::tax::PriceBreakdown;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use comfy_table::Table;
use tracing::warn;

fn arg(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

pub fn form_from_args(sub: &clap::ArgMatches) -> ProformaForm {
    ProformaForm {
        total_project_value: arg(sub, "value"),
        supply_percentage: arg(sub, "supply"),
        material_discount: arg(sub, "material-discount"),
        installation_discount: arg(sub, "installation-discount"),
        erection_discount: arg(sub, "erection-discount"),
        net_metering_discount: arg(sub, "net-metering-discount"),
        extra_height_cost: arg(sub, "extra-height"),
        transportation_cost: arg(sub, "transportation"),
        misc_expenses: arg(sub, "misc"),
        liaison_cost: arg(sub, "liaison"),
        application_cost: arg(sub, "application-cost"),
        meter_cost: arg(sub, "meter-cost"),
        ca_certificate: arg(sub, "ca-certificate"),
        fitness_certificate: arg(sub, "fitness-certificate"),
        ..ProformaForm::new(CustomerKind::Domestic)
    }
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let b = form_from_args(sub).breakdown()?;
    if b.has_negative_subtotal() {
        warn!(final_amount = %b.final_amount, "discounts exceed a subtotal");
    }
    if !maybe_print_json(json_flag, jsonl_flag, &b)? {
        println!("{}", breakdown_table(&b));
    }
    Ok(())
}

pub fn breakdown_table(b: &PriceBreakdown) -> Table {
    let rows = vec![
        vec![
            "Material supply (12%)".to_string(),
            fmt_money(&b.supply.base_after_discount),
            fmt_money(&b.supply.gst),
            fmt_money(&b.supply.inc_gst),
        ],
        vec![
            "Installation (18%)".to_string(),
            fmt_money(&b.installation.base_after_discount),
            fmt_money(&b.installation.gst),
            fmt_money(&b.installation.inc_gst),
        ],
        vec![
            "Additional works (18%)".to_string(),
            fmt_money(&b.additional.after_discount),
            fmt_money(&b.additional.gst),
            fmt_money(&b.additional.inc_gst),
        ],
        vec![
            "Net metering (no GST)".to_string(),
            fmt_money(&b.net_metering_total),
            fmt_money(&rust_decimal::Decimal::ZERO),
            fmt_money(&b.net_metering_total),
        ],
        vec![
            "Total".to_string(),
            String::new(),
            fmt_money(&b.gst_total()),
            fmt_money(&b.final_amount),
        ],
    ];
    pretty_table(&["Item", "Base", "GST", "Amount"], rows)
}

pub fn kw(sub: &clap::ArgMatches) -> Result<()> {
    let rating = SystemRating::new(&arg(sub, "watt"), &arg(sub, "qty"));
    if rating.total_kw().is_empty() {
        println!("Enter numeric module wattage and quantity");
    } else {
        println!("{} kW", rating.total_kw());
    }
    Ok(())
}
