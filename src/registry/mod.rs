//! Registry collaborator: maps fingerprints to previously registered files.
//!
//! Only the lookup side lives here. Registration, ownership and on-chain
//! bookkeeping belong to the registry service itself.

mod http;
mod memory;

pub use http::HttpRegistry;
pub use memory::InMemoryRegistry;

use crate::fingerprint::Fingerprint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A file the registry already knows under some fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub owner: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "storageLocation")]
    pub storage_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biocid: Option<String>,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Registry returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Unexpected registry response: {0}")]
    InvalidResponse(String),
}

pub trait FingerprintRegistry {
    fn find_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Vec<RegistryRecord>, RegistryError>;
}
