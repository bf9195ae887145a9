use crate::fingerprint::{Fingerprint, FingerprintOutcome};
use crate::types::FileFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FileFingerprint {
    pub source: String,
    #[serde(rename = "hexdigest")]
    pub fingerprint: Fingerprint,
    pub format: FileFormat,
    pub deterministic: bool,
    pub statistics: FingerprintStatistics,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FingerprintStatistics {
    pub lines_read: u64,
    pub candidates: u64,
    pub skipped: u64,
    pub selected: usize,
    pub keys_inserted: usize,
    pub bits_set: u64,
}

impl FileFingerprint {
    pub fn from_outcome(source: &str, outcome: &FingerprintOutcome) -> Self {
        Self {
            source: source.to_string(),
            fingerprint: outcome.fingerprint,
            format: outcome.format,
            deterministic: outcome.deterministic,
            statistics: FingerprintStatistics {
                lines_read: outcome.stats.lines_read,
                candidates: outcome.stats.candidates,
                skipped: outcome.stats.skipped(),
                selected: outcome.selected,
                keys_inserted: outcome.keys_inserted,
                bits_set: outcome.bits_set,
            },
        }
    }
}
