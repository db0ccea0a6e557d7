#![allow(non_snake_case)]

pub mod auth;
pub mod games;
pub mod stats;
pub mod users;

pub use auth::*;
pub use games::*;
pub use stats::*;
pub use users::*;

use serde::{Deserialize, Serialize};

/// Error body returned by every failing admin API route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Response of `GET /info`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
}
