// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! GST price split for solar projects.
//!
//! A project is quoted as one tax-inclusive value. Part of it is material
//! supply (12% GST) and the rest is installation (18% GST); additional works
//! carry 18% and the net-metering bucket carries no GST at all.
//!
//! Every intermediate is rounded to paise before it feeds the next step.
//! Historical invoices were produced that way, so the order matters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::round2;

/// 0.12
pub const SUPPLY_GST_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);
/// 0.18
pub const INSTALLATION_GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);
/// 0.18
pub const ADDITIONAL_WORKS_GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    #[error("Amounts are too large to price")]
    Overflow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discounts {
    pub material: Decimal,
    pub installation: Decimal,
    pub erection: Decimal,
    pub net_metering: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalWorks {
    pub extra_height: Decimal,
    pub transportation: Decimal,
    pub misc_expenses: Decimal,
    pub liaison: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetMeteringFees {
    pub application: Decimal,
    pub meter: Decimal,
    pub ca_certificate: Decimal,
    pub fitness_certificate: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    pub total_project_value: Decimal,
    /// Share of the project value billed as material supply, 0-100.
    /// Not range-checked here.
    pub supply_percentage: Decimal,
    pub discounts: Discounts,
    pub additional: AdditionalWorks,
    pub net_metering: NetMeteringFees,
}

/// One GST-bearing bucket backed out of an inclusive value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstLine {
    pub inclusive_value: Decimal,
    pub base_ex_gst: Decimal,
    pub base_after_discount: Decimal,
    pub gst: Decimal,
    pub inc_gst: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalLine {
    pub base: Decimal,
    pub after_discount: Decimal,
    pub gst: Decimal,
    pub inc_gst: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub supply: GstLine,
    pub installation: GstLine,
    pub additional: AdditionalLine,
    pub net_metering_total: Decimal,
    pub final_amount: Decimal,
}

impl PriceBreakdown {
    /// True when a discount pushed any bucket below zero.
    pub fn has_negative_subtotal(&self) -> bool {
        self.supply.inc_gst.is_sign_negative()
            || self.installation.inc_gst.is_sign_negative()
            || self.additional.inc_gst.is_sign_negative()
            || self.net_metering_total.is_sign_negative()
    }

    pub fn gst_total(&self) -> Decimal {
        self.supply.gst + self.installation.gst + self.additional.gst
    }
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal, TaxError> {
    a.checked_mul(b).ok_or(TaxError::Overflow)
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal, TaxError> {
    a.checked_add(b).ok_or(TaxError::Overflow)
}

fn sub(a: Decimal, b: Decimal) -> Result<Decimal, TaxError> {
    a.checked_sub(b).ok_or(TaxError::Overflow)
}

fn sum(values: &[Decimal]) -> Result<Decimal, TaxError> {
    values.iter().try_fold(Decimal::ZERO, |acc, v| add(acc, *v))
}

fn split_line(
    inclusive_value: Decimal,
    rate: Decimal,
    discount: Decimal,
) -> Result<GstLine, TaxError> {
    // 100/112 and 100/118: back the base out of an inclusive rate
    let divisor = Decimal::ONE_HUNDRED + rate * Decimal::ONE_HUNDRED;
    let base_ex_gst = round2(mul(inclusive_value, Decimal::ONE_HUNDRED / divisor)?);
    let base_after_discount = round2(sub(base_ex_gst, discount)?);
    let gst = round2(mul(base_after_discount, rate)?);
    let inc_gst = round2(add(base_after_discount, gst)?);
    Ok(GstLine {
        inclusive_value,
        base_ex_gst,
        base_after_discount,
        gst,
        inc_gst,
    })
}

/// Splits a quote into its GST buckets. Fails only when an amount is too
/// large for `Decimal`.
pub fn compute_breakdown(input: &PriceInput) -> Result<PriceBreakdown, TaxError> {
    let tpv = input.total_project_value;
    let pct = input.supply_percentage;

    let supply_value = round2(mul(tpv, pct)? / Decimal::ONE_HUNDRED);
    let supply = split_line(supply_value, SUPPLY_GST_RATE, input.discounts.material)?;

    let install_value = round2(mul(tpv, sub(Decimal::ONE_HUNDRED, pct)?)? / Decimal::ONE_HUNDRED);
    let installation = split_line(
        install_value,
        INSTALLATION_GST_RATE,
        input.discounts.installation,
    )?;

    let a = &input.additional;
    let base = round2(sum(&[
        a.extra_height,
        a.transportation,
        a.misc_expenses,
        a.liaison,
    ])?);
    let after_discount = round2(sub(base, input.discounts.erection)?);
    let inc_gst = round2(mul(after_discount, Decimal::ONE + ADDITIONAL_WORKS_GST_RATE)?);
    let additional = AdditionalLine {
        base,
        after_discount,
        gst: sub(inc_gst, after_discount)?,
        inc_gst,
    };

    let n = &input.net_metering;
    let net_metering_total = round2(sub(
        sum(&[n.application, n.meter, n.ca_certificate, n.fitness_certificate])?,
        input.discounts.net_metering,
    )?);

    let final_amount = round2(sum(&[
        round2(add(supply.inc_gst, installation.inc_gst)?),
        additional.inc_gst,
        net_metering_total,
    ])?);

    Ok(PriceBreakdown {
        supply,
        installation,
        additional,
        net_metering_total,
        final_amount,
    })
}
