// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiError;
use tracing::error;

pub mod accounts;
pub mod exporter;
pub mod invoices;
pub mod quote;
pub mod receipts;
pub mod transactions;

/// Unwraps a fetch, or prints its status line and yields `None`.
pub fn fetched<T>(res: Result<T, ApiError>, what: &str) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            error!(error = %e, "failed to load {}", what);
            println!("{}", e.status_message());
            None
        }
    }
}
