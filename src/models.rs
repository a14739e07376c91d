// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::{AdditionalWorks, Discounts, NetMeteringFees, PriceBreakdown, PriceInput};

/// Direction flag carried in a transaction's `cd` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "Credit", alias = "C")]
    Credit,
    #[serde(rename = "Debit", alias = "D")]
    Debit,
    /// Loan or self transfer. Kept out of credit/debit balance math.
    #[serde(rename = "CD")]
    SelfTransfer,
    #[serde(other)]
    Unknown,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Credit => "Credit",
            EntryKind::Debit => "Debit",
            EntryKind::SelfTransfer => "CD",
            EntryKind::Unknown => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub code: String,
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub from_account: String,
    #[serde(default)]
    pub to_account: String,
    #[serde(alias = "transactionType")]
    pub cd: EntryKind,
    #[serde(default)]
    pub main_header: String,
    #[serde(default)]
    pub sub_header: String,
    pub amount: Decimal,
    #[serde(default)]
    pub generated_by: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Active,
    Completed,
    Pending,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Active => write!(f, "active"),
            InvoiceStatus::Completed => write!(f, "completed"),
            InvoiceStatus::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(InvoiceStatus::Active),
            "completed" => Ok(InvoiceStatus::Completed),
            "pending" => Ok(InvoiceStatus::Pending),
            _ => Err(format!("Unknown invoice status: {}", s)),
        }
    }
}

/// A proforma invoice as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proforma {
    pub client_id: String,
    pub invoice_number: String,
    #[serde(default)]
    pub system_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(default)]
    pub module_watt: Decimal,
    #[serde(default)]
    pub quantity: Decimal,
    pub supply_percentage: Decimal,
    pub total_project_value: Decimal,
    #[serde(default)]
    pub material_discount: Decimal,
    #[serde(default)]
    pub installation_discount: Decimal,
    #[serde(default)]
    pub erection_discount: Decimal,
    #[serde(default)]
    pub net_metering_discount: Decimal,
    #[serde(default)]
    pub extra_height_cost: Decimal,
    #[serde(default)]
    pub transportation_cost: Decimal,
    #[serde(default)]
    pub misc_expenses: Decimal,
    #[serde(default)]
    pub liaison_cost: Decimal,
    #[serde(default)]
    pub application_cost: Decimal,
    #[serde(default)]
    pub meter_cost: Decimal,
    #[serde(default)]
    pub ca_certificate: Decimal,
    #[serde(default)]
    pub fitness_certificate: Decimal,
    pub status: InvoiceStatus,
}

impl Proforma {
    pub fn total_discounts(&self) -> Decimal {
        self.material_discount
            + self.installation_discount
            + self.erection_discount
            + self.net_metering_discount
    }

    pub fn price_input(&self) -> PriceInput {
        PriceInput {
            total_project_value: self.total_project_value,
            supply_percentage: self.supply_percentage,
            discounts: Discounts {
                material: self.material_discount,
                installation: self.installation_discount,
                erection: self.erection_discount,
                net_metering: self.net_metering_discount,
            },
            additional: AdditionalWorks {
                extra_height: self.extra_height_cost,
                transportation: self.transportation_cost,
                misc_expenses: self.misc_expenses,
                liaison: self.liaison_cost,
            },
            net_metering: NetMeteringFees {
                application: self.application_cost,
                meter: self.meter_cost,
                ca_certificate: self.ca_certificate,
                fitness_certificate: self.fitness_certificate,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub receipt_no: String,
    pub amount: Decimal,
    pub payment_mode: String,
    pub payment_date: String, // YYYY-MM-DD
    pub invoice_number: String,
}

/// Payload posted when a GST invoice is raised against a proforma.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstInvoice {
    pub gst_invoice_number: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub breakdown: PriceBreakdown,
}
