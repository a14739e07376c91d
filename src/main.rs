// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use solarbooks::api::{ApiClient, RecordSource, Snapshot};
use solarbooks::{cli, commands, config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = config::load(matches.get_one::<String>("config").map(Path::new))?;
    let snapshot = matches.get_one::<String>("snapshot");
    // Only commands that read records open a source.
    let open = || -> Result<Box<dyn RecordSource>> {
        let source: Box<dyn RecordSource> = match snapshot {
            Some(path) => Box::new(Snapshot::from_path(path)?),
            None => Box::new(ApiClient::new(&cfg.api_base_url)?),
        };
        Ok(source)
    };

    match matches.subcommand() {
        Some(("quote", sub)) => commands::quote::handle(sub)?,
        Some(("kw", sub)) => commands::quote::kw(sub)?,
        Some(("tx", sub)) => commands::transactions::handle(open()?.as_ref(), &cfg, sub)?,
        Some(("account", sub)) => commands::accounts::handle(open()?.as_ref(), &cfg, sub)?,
        Some(("invoice", sub)) => commands::invoices::handle(open()?.as_ref(), sub)?,
        Some(("receipt", sub)) => commands::receipts::handle(open()?.as_ref(), &cfg, sub)?,
        Some(("export", sub)) => commands::exporter::handle(open()?.as_ref(), sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
