// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use solarbooks::ledger::{
    TransactionFilter, account_balance, account_balances, amount_due, build_report,
    filter_transactions, summarize,
};
use solarbooks::models::{EntryKind, InvoiceStatus, Payment, Proforma, Transaction};

fn d(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn tx(code: &str, date: &str, from: &str, to: &str, cd: EntryKind, head: &str, amt: &str) -> Transaction {
    Transaction {
        code: code.into(),
        date: date.into(),
        from_account: from.into(),
        to_account: to.into(),
        cd,
        main_header: head.into(),
        sub_header: String::new(),
        amount: d(amt),
        generated_by: "admin".into(),
        is_verified: false,
        is_deleted: false,
    }
}

fn dataset() -> Vec<Transaction> {
    let mut v = vec![
        tx("TXN-001", "2025-04-01", "", "HDFC CA", EntryKind::Credit, "Customer Receipt", "50000"),
        tx("TXN-002", "2025-04-03", "RUPA CA", "", EntryKind::Debit, "Office Expense", "192"),
        tx("txn-003", "2025-04-10", "RUPA CA", "", EntryKind::Debit, "Transportation", "232"),
        tx("LN-004", "2025-04-15", "HDFC CA", "CASH", EntryKind::SelfTransfer, "Loan", "10000"),
        tx("TXN-005", "2025-05-02", "", "CASH", EntryKind::Credit, "Customer Receipt", "12500.50"),
        tx("TXN-006", "2025-05-20", "HDFC CA", "", EntryKind::Debit, "Material Purchase", "30000"),
    ];
    v[0].is_verified = true;
    v[4].is_verified = true;
    v[5].is_deleted = true;
    v
}

#[test]
fn empty_filter_keeps_everything() {
    let txs = dataset();
    let rows = filter_transactions(&txs, &TransactionFilter::default());
    assert_eq!(rows.len(), txs.len());
}

#[test]
fn blank_criteria_are_ignored() {
    let txs = dataset();
    let f = TransactionFilter {
        account: Some("  ".into()),
        code: Some(String::new()),
        ..TransactionFilter::default()
    };
    assert_eq!(filter_transactions(&txs, &f).len(), txs.len());
}

#[test]
fn code_filter_is_case_insensitive_substring() {
    let txs = dataset();
    let f = TransactionFilter {
        code: Some("TXN-00".into()),
        ..TransactionFilter::default()
    };
    let codes: Vec<&str> = filter_transactions(&txs, &f)
        .iter()
        .map(|t| t.code.as_str())
        .collect();
    assert_eq!(codes, ["TXN-001", "TXN-002", "txn-003", "TXN-005", "TXN-006"]);
}

#[test]
fn date_range_is_inclusive() {
    let txs = dataset();
    let f = TransactionFilter {
        date_from: Some("2025-04-03".into()),
        date_to: Some("2025-04-15".into()),
        ..TransactionFilter::default()
    };
    let codes: Vec<&str> = filter_transactions(&txs, &f)
        .iter()
        .map(|t| t.code.as_str())
        .collect();
    assert_eq!(codes, ["TXN-002", "txn-003", "LN-004"]);
}

#[test]
fn account_matches_either_side() {
    let txs = dataset();
    let f = TransactionFilter {
        account: Some("HDFC CA".into()),
        ..TransactionFilter::default()
    };
    let codes: Vec<&str> = filter_transactions(&txs, &f)
        .iter()
        .map(|t| t.code.as_str())
        .collect();
    assert_eq!(codes, ["TXN-001", "LN-004", "TXN-006"]);
}

#[test]
fn stricter_filter_yields_subset() {
    let txs = dataset();
    let loose = TransactionFilter {
        date_from: Some("2025-04-01".into()),
        ..TransactionFilter::default()
    };
    let strict = TransactionFilter {
        kind: Some(EntryKind::Debit),
        verified: Some(false),
        deleted: Some(false),
        ..loose.clone()
    };
    let loose_rows = filter_transactions(&txs, &loose);
    let strict_rows = filter_transactions(&txs, &strict);
    assert!(strict_rows.len() < loose_rows.len());
    for r in &strict_rows {
        assert!(loose_rows.contains(r));
    }
}

#[test]
fn summary_keeps_cd_out_of_net() {
    let txs = dataset();
    let s = summarize(&txs);
    assert_eq!(s.total_credit, d("62500.50"));
    assert_eq!(s.total_debit, d("30424"));
    assert_eq!(s.net, s.total_credit - s.total_debit);
    assert_eq!(s.total_self_transfer, d("10000"));
    assert_eq!((s.credit_count, s.debit_count, s.self_transfer_count), (2, 3, 1));
}

#[test]
fn unknown_flag_counts_nowhere() {
    let mut txs = dataset();
    txs.push(tx("ODD-1", "2025-06-01", "", "", EntryKind::Unknown, "", "999"));
    let s = summarize(&txs);
    assert_eq!(s.total_credit + s.total_debit + s.total_self_transfer, d("102924.50"));
}

#[test]
fn report_of_empty_selection() {
    let txs = dataset();
    let f = TransactionFilter {
        main_header: Some("Salary".into()),
        ..TransactionFilter::default()
    };
    let r = build_report(&txs, &f);
    assert!(r.rows.is_empty());
    assert_eq!(r.summary.net, Decimal::ZERO);
}

#[test]
fn rupa_ca_balance() {
    let txs = dataset();
    let b = account_balance(&txs, "RUPA CA");
    assert_eq!(b.debit, d("424"));
    assert_eq!(b.credit, Decimal::ZERO);
    assert_eq!(b.balance, d("-424"));
}

#[test]
fn balances_ignore_report_filters() {
    let txs = dataset();
    let all = account_balances(&txs, &["HDFC CA".to_string(), "CASH".to_string()]);
    // deleted rows still count towards the account summary
    assert_eq!(all[0].credit, d("50000"));
    assert_eq!(all[0].debit, d("40000"));
    assert_eq!(all[0].balance, d("10000"));
    assert_eq!(all[1].balance, d("22500.50"));
}

#[test]
fn wire_names_deserialize() {
    let raw = r#"[
        {"code":"A1","date":"2025-04-01","fromAccount":"RUPA CA","toAccount":"","cd":"D",
         "mainHeader":"Salary","subHeader":"April","amount":1200,"generatedBy":"ops",
         "isVerified":true,"isDeleted":false},
        {"code":"A2","date":"2025-04-02","toAccount":"CASH","transactionType":"Credit","amount":"99.50"},
        {"code":"A3","date":"2025-04-03","cd":"CD","amount":5},
        {"code":"A4","date":"2025-04-04","cd":"Refund","amount":5}
    ]"#;
    let txs: Vec<Transaction> = serde_json::from_str(raw).unwrap();
    assert_eq!(txs[0].cd, EntryKind::Debit);
    assert_eq!(txs[0].amount, d("1200"));
    assert!(txs[0].is_verified);
    assert_eq!(txs[1].cd, EntryKind::Credit);
    assert_eq!(txs[1].amount, d("99.50"));
    assert_eq!(txs[2].cd, EntryKind::SelfTransfer);
    assert_eq!(txs[3].cd, EntryKind::Unknown);
}

fn proforma() -> Proforma {
    Proforma {
        client_id: "C-17".into(),
        invoice_number: "PI-2025-017".into(),
        system_type: "On-Grid".into(),
        gstin: None,
        module_watt: d("540"),
        quantity: d("6"),
        supply_percentage: d("80"),
        total_project_value: d("250000"),
        material_discount: d("2000"),
        installation_discount: d("500"),
        erection_discount: Decimal::ZERO,
        net_metering_discount: Decimal::ZERO,
        extra_height_cost: Decimal::ZERO,
        transportation_cost: Decimal::ZERO,
        misc_expenses: Decimal::ZERO,
        liaison_cost: Decimal::ZERO,
        application_cost: Decimal::ZERO,
        meter_cost: Decimal::ZERO,
        ca_certificate: Decimal::ZERO,
        fitness_certificate: Decimal::ZERO,
        status: InvoiceStatus::Active,
    }
}

fn payment(no: &str, invoice: &str, amt: &str) -> Payment {
    Payment {
        receipt_no: no.into(),
        amount: d(amt),
        payment_mode: "UPI".into(),
        payment_date: "2025-04-20".into(),
        invoice_number: invoice.into(),
    }
}

#[test]
fn amount_due_subtracts_linked_payments_and_discounts() {
    let payments = vec![
        payment("R1", "PI-2025-017", "100000"),
        payment("R2", "PI-2025-999", "5000"),
        payment("R3", "PI-2025-017", "47500"),
    ];
    let due = amount_due(&proforma(), &payments);
    assert_eq!(due.paid, d("147500"));
    assert_eq!(due.discounts, d("2500"));
    assert_eq!(due.due, d("100000"));
}

#[test]
fn amount_due_is_not_clamped() {
    let payments = vec![payment("R1", "PI-2025-017", "250000")];
    let due = amount_due(&proforma(), &payments);
    assert_eq!(due.due, d("-2500"));
}
