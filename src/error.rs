use crate::types::FileFormat;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FingerprintError>;

/// Failures raised while computing or comparing fingerprints.
///
/// Parsing errors are permanent: a malformed genomic file stays malformed, so
/// nothing in the pipeline retries them.
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Unsupported file format: no recognizable header and no eligible SNPs")]
    UnsupportedFormat,

    #[error("Variant-call file declares no sample columns")]
    NoSamples,

    #[error("Sample index {index} out of range: file declares {samples} sample(s)")]
    SampleIndexOutOfRange { index: usize, samples: usize },

    #[error("No eligible SNPs survived filtering ({format})")]
    NoEligibleSnps { format: FileFormat },

    #[error("Malformed record at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("Invalid fingerprint configuration: {0}")]
    InvalidConfig(String),

    #[error("Fingerprint registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
