use super::Fingerprint;
use crate::error::{FingerprintError, Result};
use crate::registry::{FingerprintRegistry, RegistryRecord};
use serde::Serialize;
use std::fmt;

/// Outcome of an integrity check. A mismatch is an expected answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Verified,
    Mismatch,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Verified => "Verified",
            Verdict::Mismatch => "Mismatch",
        })
    }
}

pub fn verify(local: &Fingerprint, reference: &Fingerprint) -> Verdict {
    if local == reference {
        Verdict::Verified
    } else {
        Verdict::Mismatch
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DuplicateReport {
    pub fingerprint: Fingerprint,
    pub duplicates: Vec<RegistryRecord>,
}

impl DuplicateReport {
    pub fn is_duplicate(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Every registry record sharing `fingerprint` is a duplicate of the current file.
///
/// Lookup failures surface as [`FingerprintError::RegistryUnavailable`]; the
/// caller decides whether to carry on without a duplicate check.
pub fn find_duplicates<R: FingerprintRegistry + ?Sized>(
    registry: &R,
    fingerprint: &Fingerprint,
) -> Result<DuplicateReport> {
    let duplicates = registry
        .find_by_fingerprint(fingerprint)
        .map_err(|e| FingerprintError::RegistryUnavailable(e.to_string()))?;
    log::info!(
        "Registry reports {} record(s) for {}",
        duplicates.len(),
        fingerprint
    );

    Ok(DuplicateReport {
        fingerprint: *fingerprint,
        duplicates,
    })
}
