// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering and totals over fetched transaction lists.
//!
//! Everything here works on the in-memory list the backend returned and is
//! re-run from scratch whenever the list or the filter changes.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{EntryKind, Payment, Proforma, Transaction};

/// Report-level filter. `None` or a blank string leaves a criterion out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub account: Option<String>,
    pub main_header: Option<String>,
    pub sub_header: Option<String>,
    /// Case-insensitive substring of the transaction code.
    pub code: Option<String>,
    /// Inclusive, compared as `YYYY-MM-DD` strings.
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub kind: Option<EntryKind>,
    pub verified: Option<bool>,
    pub deleted: Option<bool>,
}

fn criterion(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(acct) = criterion(&self.account) {
            if t.from_account != acct && t.to_account != acct {
                return false;
            }
        }
        if let Some(head) = criterion(&self.main_header) {
            if t.main_header != head {
                return false;
            }
        }
        if let Some(sub) = criterion(&self.sub_header) {
            if t.sub_header != sub {
                return false;
            }
        }
        if let Some(code) = criterion(&self.code) {
            if !t.code.to_lowercase().contains(&code.to_lowercase()) {
                return false;
            }
        }
        if let Some(from) = criterion(&self.date_from) {
            if t.date.as_str() < from {
                return false;
            }
        }
        if let Some(to) = criterion(&self.date_to) {
            if t.date.as_str() > to {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if t.cd != kind {
                return false;
            }
        }
        if let Some(verified) = self.verified {
            if t.is_verified != verified {
                return false;
            }
        }
        if let Some(deleted) = self.deleted {
            if t.is_deleted != deleted {
                return false;
            }
        }
        true
    }
}

pub fn filter_transactions<'a>(
    txs: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    txs.iter().filter(|t| filter.matches(t)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub net: Decimal,
    pub total_self_transfer: Decimal,
    pub credit_count: usize,
    pub debit_count: usize,
    pub self_transfer_count: usize,
}

pub fn summarize<'a, I>(rows: I) -> LedgerSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut s = LedgerSummary::default();
    for t in rows {
        match t.cd {
            EntryKind::Credit => {
                s.total_credit += t.amount;
                s.credit_count += 1;
            }
            EntryKind::Debit => {
                s.total_debit += t.amount;
                s.debit_count += 1;
            }
            EntryKind::SelfTransfer => {
                s.total_self_transfer += t.amount;
                s.self_transfer_count += 1;
            }
            EntryKind::Unknown => {}
        }
    }
    s.net = s.total_credit - s.total_debit;
    s
}

#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub rows: Vec<&'a Transaction>,
    pub summary: LedgerSummary,
}

pub fn build_report<'a>(txs: &'a [Transaction], filter: &TransactionFilter) -> Report<'a> {
    let rows = filter_transactions(txs, filter);
    let summary = summarize(rows.iter().copied());
    Report { rows, summary }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalance {
    pub account: String,
    pub credit: Decimal,
    pub debit: Decimal,
    pub balance: Decimal,
}

/// Money in minus money out for one account, over the whole list.
/// Report filters do not apply here.
pub fn account_balance(txs: &[Transaction], account: &str) -> AccountBalance {
    let mut credit = Decimal::ZERO;
    let mut debit = Decimal::ZERO;
    for t in txs {
        if t.to_account == account {
            credit += t.amount;
        }
        if t.from_account == account {
            debit += t.amount;
        }
    }
    AccountBalance {
        account: account.to_string(),
        credit,
        debit,
        balance: credit - debit,
    }
}

pub fn account_balances(txs: &[Transaction], accounts: &[String]) -> Vec<AccountBalance> {
    accounts.iter().map(|a| account_balance(txs, a)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountDue {
    pub invoice_number: String,
    pub total: Decimal,
    pub paid: Decimal,
    pub discounts: Decimal,
    /// Not clamped. Negative means the invoice is over-paid or over-discounted.
    pub due: Decimal,
}

pub fn amount_due(proforma: &Proforma, payments: &[Payment]) -> AmountDue {
    let paid: Decimal = payments
        .iter()
        .filter(|p| p.invoice_number == proforma.invoice_number)
        .map(|p| p.amount)
        .sum();
    let discounts = proforma.total_discounts();
    AmountDue {
        invoice_number: proforma.invoice_number.clone(),
        total: proforma.total_project_value,
        paid,
        discounts,
        due: proforma.total_project_value - paid - discounts,
    }
}
