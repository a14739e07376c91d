// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Form state for proforma, GST invoice and payment receipt entry.
//!
//! Inputs are held as the raw strings the user typed. Setters that feed a
//! derived field recompute it on the spot; nothing recomputes behind the
//! caller's back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{GstInvoice, InvoiceStatus, Payment, Proforma};
use crate::tax::{
    AdditionalWorks, Discounts, NetMeteringFees, PriceBreakdown, PriceInput, TaxError,
    compute_breakdown,
};
use crate::utils::round_half_up;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Supply percentage must be between 0 and 100, got {0}")]
    SupplyPercentageOutOfRange(Decimal),

    #[error("Payment amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Unknown payment mode '{0}'")]
    UnknownPaymentMode(String),

    #[error("Unknown system type '{0}'")]
    UnknownSystemType(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Commercial invoices need the customer's GSTIN")]
    MissingGstin,

    #[error(transparent)]
    Tax(#[from] TaxError),
}

fn parse_input(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<Decimal>().ok()
}

/// System size in kW from panel wattage and panel count.
///
/// Rounded to three places with trailing zeros dropped (`"10.800"` shows as
/// `"10.8"`). Blank, non-numeric or out-of-range input gives an empty string.
pub fn total_kw(module_watt: &str, quantity: &str) -> String {
    let (Some(watt), Some(qty)) = (parse_input(module_watt), parse_input(quantity)) else {
        return String::new();
    };
    match watt.checked_mul(qty) {
        Some(w) => round_half_up(w / Decimal::ONE_THOUSAND, 3).normalize().to_string(),
        None => String::new(),
    }
}

fn required(field: &'static str, raw: &str) -> Result<String, FormError> {
    let v = raw.trim();
    if v.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(v.to_string())
}

fn required_decimal(field: &'static str, raw: &str) -> Result<Decimal, FormError> {
    let v = required(field, raw)?;
    v.parse::<Decimal>()
        .map_err(|_| FormError::InvalidNumber { field, value: v })
}

fn optional_decimal(field: &'static str, raw: &str) -> Result<Decimal, FormError> {
    if raw.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    required_decimal(field, raw)
}

fn required_date(raw: &str) -> Result<String, FormError> {
    let v = required("date", raw)?;
    NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|_| FormError::InvalidDate(v.clone()))?;
    Ok(v)
}

/// The calculator takes any percentage; callers must keep it in range.
pub fn check_supply_percentage(pct: Decimal) -> Result<Decimal, FormError> {
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(FormError::SupplyPercentageOutOfRange(pct));
    }
    Ok(pct)
}

/// Panel wattage and count with the derived kW rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemRating {
    module_watt: String,
    quantity: String,
    total_kw: String,
}

impl SystemRating {
    pub fn new(module_watt: &str, quantity: &str) -> Self {
        let mut r = Self {
            module_watt: module_watt.to_string(),
            quantity: quantity.to_string(),
            total_kw: String::new(),
        };
        r.recompute();
        r
    }

    pub fn set_module_watt(&mut self, v: &str) {
        self.module_watt = v.to_string();
        self.recompute();
    }

    pub fn set_quantity(&mut self, v: &str) {
        self.quantity = v.to_string();
        self.recompute();
    }

    pub fn module_watt(&self) -> &str {
        &self.module_watt
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn total_kw(&self) -> &str {
        &self.total_kw
    }

    fn recompute(&mut self) {
        self.total_kw = total_kw(&self.module_watt, &self.quantity);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerKind {
    #[default]
    Domestic,
    Commercial,
}

/// Domestic and commercial proforma entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProformaForm {
    pub kind: CustomerKind,
    pub client_id: String,
    pub invoice_number: String,
    pub system_type: String,
    pub gstin: String,
    pub rating: SystemRating,
    pub total_project_value: String,
    pub supply_percentage: String,
    pub material_discount: String,
    pub installation_discount: String,
    pub erection_discount: String,
    pub net_metering_discount: String,
    pub extra_height_cost: String,
    pub transportation_cost: String,
    pub misc_expenses: String,
    pub liaison_cost: String,
    pub application_cost: String,
    pub meter_cost: String,
    pub ca_certificate: String,
    pub fitness_certificate: String,
}

impl ProformaForm {
    pub fn new(kind: CustomerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn to_price_input(&self) -> Result<PriceInput, FormError> {
        let supply_percentage = check_supply_percentage(required_decimal(
            "supply percentage",
            &self.supply_percentage,
        )?)?;
        Ok(PriceInput {
            total_project_value: required_decimal(
                "total project value",
                &self.total_project_value,
            )?,
            supply_percentage,
            discounts: Discounts {
                material: optional_decimal("material discount", &self.material_discount)?,
                installation: optional_decimal(
                    "installation discount",
                    &self.installation_discount,
                )?,
                erection: optional_decimal("erection discount", &self.erection_discount)?,
                net_metering: optional_decimal(
                    "net metering discount",
                    &self.net_metering_discount,
                )?,
            },
            additional: AdditionalWorks {
                extra_height: optional_decimal("extra height cost", &self.extra_height_cost)?,
                transportation: optional_decimal(
                    "transportation cost",
                    &self.transportation_cost,
                )?,
                misc_expenses: optional_decimal("misc expenses", &self.misc_expenses)?,
                liaison: optional_decimal("liaison cost", &self.liaison_cost)?,
            },
            net_metering: NetMeteringFees {
                application: optional_decimal("application cost", &self.application_cost)?,
                meter: optional_decimal("meter cost", &self.meter_cost)?,
                ca_certificate: optional_decimal("CA certificate", &self.ca_certificate)?,
                fitness_certificate: optional_decimal(
                    "fitness certificate",
                    &self.fitness_certificate,
                )?,
            },
        })
    }

    pub fn breakdown(&self) -> Result<PriceBreakdown, FormError> {
        Ok(compute_breakdown(&self.to_price_input()?)?)
    }

    /// Builds the record to submit. New proformas start out pending.
    pub fn to_proforma(&self, cfg: &AppConfig) -> Result<Proforma, FormError> {
        let client_id = required("client", &self.client_id)?;
        let invoice_number = required("invoice number", &self.invoice_number)?;
        let system_type = required("system type", &self.system_type)?;
        if !cfg.system_types.iter().any(|t| t == &system_type) {
            return Err(FormError::UnknownSystemType(system_type));
        }
        let gstin = match (self.kind, self.gstin.trim()) {
            (CustomerKind::Commercial, "") => return Err(FormError::MissingGstin),
            (_, "") => None,
            (_, g) => Some(g.to_uppercase()),
        };
        let input = self.to_price_input()?;
        Ok(Proforma {
            client_id,
            invoice_number,
            system_type,
            gstin,
            module_watt: optional_decimal("module watt", self.rating.module_watt())?,
            quantity: optional_decimal("quantity", self.rating.quantity())?,
            supply_percentage: input.supply_percentage,
            total_project_value: input.total_project_value,
            material_discount: input.discounts.material,
            installation_discount: input.discounts.installation,
            erection_discount: input.discounts.erection,
            net_metering_discount: input.discounts.net_metering,
            extra_height_cost: input.additional.extra_height,
            transportation_cost: input.additional.transportation,
            misc_expenses: input.additional.misc_expenses,
            liaison_cost: input.additional.liaison,
            application_cost: input.net_metering.application,
            meter_cost: input.net_metering.meter,
            ca_certificate: input.net_metering.ca_certificate,
            fitness_certificate: input.net_metering.fitness_certificate,
            status: InvoiceStatus::Pending,
        })
    }
}

/// GST invoice raised from an existing proforma.
#[derive(Debug, Clone, PartialEq)]
pub struct GstInvoiceForm {
    pub gst_invoice_number: String,
    pub invoice_date: String,
    invoice_number: String,
    rating: SystemRating,
    input: PriceInput,
}

impl GstInvoiceForm {
    pub fn from_proforma(p: &Proforma) -> Self {
        Self {
            gst_invoice_number: String::new(),
            invoice_date: String::new(),
            invoice_number: p.invoice_number.clone(),
            rating: SystemRating::new(&p.module_watt.to_string(), &p.quantity.to_string()),
            input: p.price_input(),
        }
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn rating(&self) -> &SystemRating {
        &self.rating
    }

    pub fn set_supply_percentage(&mut self, raw: &str) -> Result<(), FormError> {
        let pct = check_supply_percentage(required_decimal("supply percentage", raw)?)?;
        self.input.supply_percentage = pct;
        Ok(())
    }

    pub fn price_input(&self) -> &PriceInput {
        &self.input
    }

    pub fn breakdown(&self) -> Result<PriceBreakdown, FormError> {
        Ok(compute_breakdown(&self.input)?)
    }

    pub fn to_gst_invoice(&self) -> Result<GstInvoice, FormError> {
        Ok(GstInvoice {
            gst_invoice_number: required("GST invoice number", &self.gst_invoice_number)?,
            invoice_number: self.invoice_number.clone(),
            invoice_date: required_date(&self.invoice_date)?,
            breakdown: self.breakdown()?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentReceiptForm {
    pub receipt_no: String,
    pub invoice_number: String,
    pub amount: String,
    pub payment_mode: String,
    pub payment_date: String,
}

impl PaymentReceiptForm {
    pub fn to_payment(&self, cfg: &AppConfig) -> Result<Payment, FormError> {
        let receipt_no = required("receipt number", &self.receipt_no)?;
        let invoice_number = required("invoice number", &self.invoice_number)?;
        let amount = required_decimal("amount", &self.amount)?;
        if amount <= Decimal::ZERO {
            return Err(FormError::NonPositiveAmount);
        }
        let mode = required("payment mode", &self.payment_mode)?;
        let payment_mode = cfg
            .payment_modes
            .iter()
            .find(|m| m.eq_ignore_ascii_case(&mode))
            .cloned()
            .ok_or(FormError::UnknownPaymentMode(mode))?;
        Ok(Payment {
            receipt_no,
            amount,
            payment_mode,
            payment_date: required_date(&self.payment_date)?,
            invoice_number,
        })
    }
}
