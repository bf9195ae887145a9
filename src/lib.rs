//! Content-derived fingerprints for genomic variant and genotype files.
//!
//! A fingerprint is the SHA-256 of a Bloom filter populated with a
//! genome-wide sample of a file's SNP calls. It identifies a file's genomic
//! content without revealing it, and is used for duplicate detection against
//! a registry and for integrity checks after transfer.
//!
//! ```no_run
//! use genome_fingerprint::{FingerprintConfig, Fingerprinter};
//!
//! let fingerprinter = Fingerprinter::new(FingerprintConfig::default())?;
//! let outcome = fingerprinter.fingerprint_path(std::path::Path::new("sample.vcf.gz"))?;
//! println!("{} ({})", outcome.fingerprint, outcome.format);
//! # Ok::<(), genome_fingerprint::FingerprintError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod fingerprint;
pub mod registry;
pub mod types;
pub mod utils;

pub use config::{ConsumerMode, FillStrategy, FingerprintConfig};
pub use error::{FingerprintError, Result};
pub use fingerprint::{
    find_duplicates, verify, DuplicateReport, Fingerprint, FingerprintOutcome, Fingerprinter,
    Verdict,
};
pub use registry::{FingerprintRegistry, HttpRegistry, InMemoryRegistry, RegistryRecord};
pub use types::{FileFormat, SnpRecord};
