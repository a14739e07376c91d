// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::{GstInvoice, Payment, Proforma, Transaction};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("unreadable response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("{0} is not available on a read-only snapshot")]
    ReadOnly(&'static str),
}

impl ApiError {
    /// The one-line status shown to the user in place of the failed result.
    pub fn status_message(&self) -> String {
        match self {
            ApiError::Network(e) if e.is_timeout() => {
                "The server took too long to respond. Please try again.".to_string()
            }
            ApiError::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Status { path, status } if *status >= 500 => {
                format!("Server error ({}) on {}. Please try again later.", status, path)
            }
            ApiError::Status { path, status } => {
                format!("Request to {} was rejected ({}).", path, status)
            }
            ApiError::Decode { path, .. } => {
                format!("The server sent an unexpected response for {}.", path)
            }
            ApiError::Snapshot(msg) => format!("Could not read snapshot: {}", msg),
            ApiError::ReadOnly(what) => {
                format!("Cannot {} while working from a snapshot file.", what)
            }
        }
    }
}

/// Where transaction, proforma and payment lists come from.
pub trait RecordSource {
    fn transactions(&self) -> Result<Vec<Transaction>, ApiError>;
    fn proformas(&self) -> Result<Vec<Proforma>, ApiError>;
    fn payments(&self) -> Result<Vec<Payment>, ApiError>;
    fn submit_payment(&self, payment: &Payment) -> Result<(), ApiError>;
    fn submit_gst_invoice(&self, invoice: &GstInvoice) -> Result<(), ApiError>;
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: crate::utils::http_client()?,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }
        resp.json().map_err(|e| {
            if e.is_decode() {
                ApiError::Decode {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            } else {
                ApiError::Network(e)
            }
        })
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let resp = self.client.post(&url).json(body).send()?;
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }
}

impl RecordSource for ApiClient {
    fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get("/transactions")
    }

    fn proformas(&self) -> Result<Vec<Proforma>, ApiError> {
        self.get("/proformas")
    }

    fn payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get("/payments")
    }

    fn submit_payment(&self, payment: &Payment) -> Result<(), ApiError> {
        self.post("/payments", payment)
    }

    fn submit_gst_invoice(&self, invoice: &GstInvoice) -> Result<(), ApiError> {
        self.post("/gst-invoices", invoice)
    }
}

/// A saved dump of backend lists, for working offline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub proformas: Vec<Proforma>,
    pub payments: Vec<Payment>,
}

impl Snapshot {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ApiError::Snapshot(format!("{}: {}", path.display(), e)))?;
        let snap: Snapshot = serde_json::from_str(&raw)
            .map_err(|e| ApiError::Snapshot(format!("{}: {}", path.display(), e)))?;
        debug!(
            path = %path.display(),
            transactions = snap.transactions.len(),
            proformas = snap.proformas.len(),
            payments = snap.payments.len(),
            "loaded snapshot"
        );
        Ok(snap)
    }
}

impl RecordSource for Snapshot {
    fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        Ok(self.transactions.clone())
    }

    fn proformas(&self) -> Result<Vec<Proforma>, ApiError> {
        Ok(self.proformas.clone())
    }

    fn payments(&self) -> Result<Vec<Payment>, ApiError> {
        Ok(self.payments.clone())
    }

    fn submit_payment(&self, _payment: &Payment) -> Result<(), ApiError> {
        Err(ApiError::ReadOnly("record a payment"))
    }

    fn submit_gst_invoice(&self, _invoice: &GstInvoice) -> Result<(), ApiError> {
        Err(ApiError::ReadOnly("raise a GST invoice"))
    }
}
