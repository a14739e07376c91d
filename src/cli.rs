// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn money(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn filter_args() -> Vec<Arg> {
    vec![
        Arg::new("account")
            .long("account")
            .help("Only rows where this account is the source or destination"),
        Arg::new("head").long("head").help("Main header"),
        Arg::new("sub-head").long("sub-head").help("Sub header"),
        Arg::new("code")
            .long("code")
            .help("Transaction code contains (case-insensitive)"),
        Arg::new("from").long("from").help("From date YYYY-MM-DD (inclusive)"),
        Arg::new("to").long("to").help("To date YYYY-MM-DD (inclusive)"),
        Arg::new("type")
            .long("type")
            .value_parser(["credit", "debit", "cd"])
            .help("Credit, debit or CD (loan/self transfer)"),
        Arg::new("verified")
            .long("verified")
            .value_parser(["yes", "no"])
            .help("Verification status"),
        Arg::new("include-deleted")
            .long("include-deleted")
            .action(ArgAction::SetTrue)
            .help("Include rows marked deleted"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("solarbooks")
        .about("GST invoice pricing, payment tracking, and transaction reports for solar installers")
        .version(clap::crate_version!())
        .arg(Arg::new("config").long("config").help("Path to a JSON config file"))
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .help("Read records from a JSON snapshot instead of the API"),
        )
        .subcommand(
            Command::new("quote")
                .about("GST split for a project value")
                .arg(Arg::new("value").long("value").required(true).help("Total project value (GST inclusive)"))
                .arg(Arg::new("supply").long("supply").required(true).help("Supply percentage 0-100"))
                .arg(money("material-discount", "Discount on material supply"))
                .arg(money("installation-discount", "Discount on installation"))
                .arg(money("erection-discount", "Discount on additional/erection works"))
                .arg(money("net-metering-discount", "Discount on net metering fees"))
                .arg(money("extra-height", "Extra height structure cost"))
                .arg(money("transportation", "Transportation cost"))
                .arg(money("misc", "Miscellaneous expenses"))
                .arg(money("liaison", "Liaison cost"))
                .arg(money("application-cost", "Net metering application cost"))
                .arg(money("meter-cost", "Meter cost"))
                .arg(money("ca-certificate", "CA certificate fee"))
                .arg(money("fitness-certificate", "Fitness certificate fee"))
                .args(json_args()),
        )
        .subcommand(
            Command::new("kw")
                .about("System size from module wattage and quantity")
                .arg(Arg::new("watt").long("watt").required(true))
                .arg(Arg::new("qty").long("qty").required(true)),
        )
        .subcommand(
            Command::new("tx")
                .about("Transaction reports")
                .subcommand(
                    Command::new("list")
                        .args(filter_args())
                        .arg(
                            Arg::new("page")
                                .long("page")
                                .value_parser(value_parser!(usize))
                                .default_value("1"),
                        )
                        .arg(
                            Arg::new("page-size")
                                .long("page-size")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(Command::new("summary").args(filter_args()).args(json_args())),
        )
        .subcommand(
            Command::new("account").about("Account summaries").subcommand(
                Command::new("balances")
                    .arg(
                        Arg::new("name")
                            .long("name")
                            .action(ArgAction::Append)
                            .help("Account name (repeatable; defaults to configured accounts)"),
                    )
                    .args(json_args()),
            ),
        )
        .subcommand(
            Command::new("invoice")
                .about("Proforma and GST invoices")
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .value_parser(["active", "completed", "pending"]),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("due")
                        .arg(Arg::new("invoice").long("invoice").required(true))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("gst")
                        .arg(Arg::new("invoice").long("invoice").required(true))
                        .arg(Arg::new("gst-number").long("gst-number").required(true))
                        .arg(Arg::new("date").long("date").help("Invoice date YYYY-MM-DD (default today)"))
                        .arg(Arg::new("supply").long("supply").help("Override supply percentage"))
                        .arg(
                            Arg::new("submit")
                                .long("submit")
                                .action(ArgAction::SetTrue)
                                .help("Send the invoice to the server"),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("receipt").about("Payment receipts").subcommand(
                Command::new("add")
                    .arg(Arg::new("invoice").long("invoice").required(true))
                    .arg(Arg::new("receipt-no").long("receipt-no").required(true))
                    .arg(Arg::new("amount").long("amount").required(true))
                    .arg(Arg::new("mode").long("mode").required(true))
                    .arg(Arg::new("date").long("date").help("Payment date YYYY-MM-DD (default today)")),
            ),
        )
        .subcommand(
            Command::new("export").about("Export report rows").subcommand(
                Command::new("transactions")
                    .args(filter_args())
                    .arg(Arg::new("format").long("format").required(true).help("csv|json"))
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
}
