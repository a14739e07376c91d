// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Solarbooks", "solarbooks"));

pub const API_URL_ENV: &str = "SOLARBOOKS_API_URL";

/// Dropdown lists and endpoints the forms and reports work against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub accounts: Vec<String>,
    pub main_headers: Vec<String>,
    pub system_types: Vec<String>,
    pub payment_modes: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            page_size: 10,
            accounts: strings(&["CASH", "RUPA CA", "HDFC CA", "SBI CA", "ICICI OD"]),
            main_headers: strings(&[
                "Customer Receipt",
                "Material Purchase",
                "Installation Labour",
                "Transportation",
                "Salary",
                "Office Expense",
                "Loan",
            ]),
            system_types: strings(&["On-Grid", "Off-Grid", "Hybrid"]),
            payment_modes: strings(&["Cash", "UPI", "NEFT", "RTGS", "Cheque"]),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let cfg: AppConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Load once at startup. An explicit path must exist; the platform default is optional.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    let mut cfg = match explicit {
        Some(p) => read_config(p)?,
        None => {
            let p = config_path()?;
            if p.exists() {
                read_config(&p)?
            } else {
                debug!("no config file, using defaults");
                AppConfig::default()
            }
        }
    };
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            cfg.api_base_url = url.trim().to_string();
        }
    }
    if cfg.page_size == 0 {
        cfg.page_size = AppConfig::default().page_size;
    }
    Ok(cfg)
}
