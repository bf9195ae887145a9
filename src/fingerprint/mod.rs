//! Genomic file fingerprinting.
//!
//! raw bytes → [`input`] → [`sniffer`] → [`extract`] → [`sampler`] →
//! [`bloom`] → [`digest`]. Each run owns its filter; nothing is shared
//! between concurrent runs.

pub mod bloom;
pub mod compare;
pub mod digest;
pub mod extract;
pub mod input;
pub mod sampler;
pub mod sniffer;

pub use bloom::BloomFilter;
pub use compare::{find_duplicates, verify, DuplicateReport, Verdict};
pub use digest::{Fingerprint, ParseFingerprintError, FINGERPRINT_LEN};
pub use extract::{ConsumerGenotypeExtractor, ExtractionStats, VariantCallExtractor};
pub use sniffer::{sniff, Evidence, Sniffed};

use crate::config::FingerprintConfig;
use crate::error::{FingerprintError, Result};
use crate::types::{FileFormat, SnpRecord};
use input::GenomicInput;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Everything a caller learns from one fingerprinting run.
#[derive(Debug, Clone)]
pub struct FingerprintOutcome {
    pub fingerprint: Fingerprint,
    pub format: FileFormat,
    pub stats: ExtractionStats,
    pub selected: usize,
    pub keys_inserted: usize,
    pub bits_set: u64,
    /// False only when the sampler actually filled slots at random.
    pub deterministic: bool,
}

#[derive(Debug, Clone)]
pub struct Fingerprinter {
    config: FingerprintConfig,
    sample_index: usize,
}

impl Fingerprinter {
    pub fn new(config: FingerprintConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sample_index: 0,
        })
    }

    /// Sample column used for variant-call input; ignored for consumer files.
    pub fn with_sample_index(mut self, sample_index: usize) -> Self {
        self.sample_index = sample_index;
        self
    }

    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    pub fn fingerprint_path(&self, path: &Path) -> Result<FingerprintOutcome> {
        let file = File::open(path)?;
        self.fingerprint_reader(file)
    }

    pub fn fingerprint_reader<R: Read>(&self, reader: R) -> Result<FingerprintOutcome> {
        let input = GenomicInput::new(reader)?;
        if input.head().is_empty() {
            return Err(FingerprintError::UnsupportedFormat);
        }

        let sniffed = sniff(input.head());
        log::debug!("Sniffed {} ({:?})", sniffed.format, sniffed.evidence);

        let extraction = match sniffed.format {
            FileFormat::VariantCall => {
                VariantCallExtractor::new(self.sample_index).extract(input.into_lines())
            }
            _ => ConsumerGenotypeExtractor::new(
                self.config.consumer_mode,
                self.config.target_snp_count,
            )
            .extract(input.into_lines()),
        };
        let extraction = match extraction {
            Err(FingerprintError::NoEligibleSnps { .. }) if sniffed.is_fallback() => {
                return Err(FingerprintError::UnsupportedFormat)
            }
            other => other?,
        };

        let stats = extraction.stats;
        let selection = sampler::select_genome_wide(
            extraction.records,
            self.config.target_snp_count,
            self.config.fill_strategy,
        );
        let (filter, keys_inserted) = encode(&selection.records, sniffed.format, &self.config);
        let fingerprint = Fingerprint::from_filter(&filter);

        log::info!(
            "Fingerprint {} from {} of {} candidate SNPs ({})",
            fingerprint,
            selection.records.len(),
            stats.candidates,
            sniffed.format
        );

        Ok(FingerprintOutcome {
            fingerprint,
            format: sniffed.format,
            stats,
            selected: selection.records.len(),
            keys_inserted,
            bits_set: filter.bits_set(),
            deterministic: selection.is_deterministic(),
        })
    }
}

/// Insert `records` into a fresh filter in genome order.
///
/// Consumer-genotype records also insert their bare rsid so files lacking
/// ref/alt detail can still be matched. Returns the filter and the number of
/// keys inserted.
pub fn encode(
    records: &[SnpRecord],
    format: FileFormat,
    config: &FingerprintConfig,
) -> (BloomFilter, usize) {
    let mut ordered: Vec<&SnpRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.genome_order(b));

    let mut filter = BloomFilter::with_accuracy(config.bloom_capacity, config.false_positive_rate);
    let mut keys = 0;
    for snp in ordered {
        filter.insert(&snp.insertion_key());
        keys += 1;
        if format == FileFormat::ConsumerGenotype {
            filter.insert(&snp.variant_label);
            keys += 1;
        }
    }

    if keys > config.bloom_capacity {
        log::warn!(
            "Inserted {} keys into a filter sized for {}; false-positive rate exceeds target",
            keys,
            config.bloom_capacity
        );
    }
    (filter, keys)
}

/// Classify a file without extracting anything. Empty input is
/// [`FileFormat::Unsupported`].
pub fn sniff_path(path: &Path) -> Result<Sniffed> {
    let unsupported = Sniffed {
        format: FileFormat::Unsupported,
        evidence: Evidence::Fallback,
    };
    let input = match GenomicInput::new(File::open(path)?) {
        Ok(input) => input,
        Err(FingerprintError::UnsupportedFormat) => return Ok(unsupported),
        Err(e) => return Err(e),
    };
    if input.head().is_empty() {
        return Ok(unsupported);
    }
    Ok(sniff(input.head()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(target: usize) -> FingerprintConfig {
        FingerprintConfig::default()
            .with_target_snp_count(target)
            .with_bloom(200, 0.01)
    }

    #[test]
    fn encode_is_independent_of_record_order() {
        let a = SnpRecord::from_consumer("rs1", "1", 10, "AG");
        let b = SnpRecord::from_consumer("rs2", "2", 20, "CT");
        let cfg = config(10);
        let (f1, keys) = encode(&[a.clone(), b.clone()], FileFormat::ConsumerGenotype, &cfg);
        let (f2, _) = encode(&[b, a], FileFormat::ConsumerGenotype, &cfg);
        assert_eq!(f1, f2);
        assert_eq!(keys, 4);
    }

    #[test]
    fn consumer_records_insert_bare_rsid() {
        let snp = SnpRecord::from_consumer("rs4477212", "1", 82154, "AA");
        let cfg = config(10);
        let (consumer, _) = encode(std::slice::from_ref(&snp), FileFormat::ConsumerGenotype, &cfg);
        let (variant, keys) = encode(std::slice::from_ref(&snp), FileFormat::VariantCall, &cfg);
        assert!(consumer.contains("rs4477212"));
        assert!(consumer.contains("1:82154:AA::"));
        assert_eq!(keys, 1);
        assert!(variant.contains("1:82154:AA::"));
    }

    #[test]
    fn garbage_without_markers_is_unsupported() {
        let text = "hello world\nthis is not genomic\n";
        let result = Fingerprinter::new(config(10))
            .unwrap()
            .fingerprint_reader(text.as_bytes());
        assert!(matches!(result, Err(FingerprintError::UnsupportedFormat)));
    }

    #[test]
    fn marked_consumer_file_without_snps_is_no_eligible() {
        let text = "# This data file generated by 23andMe\n# rsid\tchromosome\tposition\tgenotype\n";
        let result = Fingerprinter::new(config(10))
            .unwrap()
            .fingerprint_reader(text.as_bytes());
        assert!(matches!(
            result,
            Err(FingerprintError::NoEligibleSnps {
                format: FileFormat::ConsumerGenotype
            })
        ));
    }

    #[test]
    fn empty_files_sniff_as_unsupported() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, b"").unwrap();
        let gzipped = dir.path().join("empty.txt.gz");
        let encoded = GzEncoder::new(Vec::new(), Compression::default())
            .finish()
            .unwrap();
        std::fs::write(&gzipped, encoded).unwrap();

        for path in [&empty, &gzipped] {
            let sniffed = sniff_path(path).unwrap();
            assert_eq!(sniffed.format, FileFormat::Unsupported);
            assert!(sniffed.is_fallback());
        }
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let result = Fingerprinter::new(FingerprintConfig::default().with_bloom(10, 2.0));
        assert!(matches!(result, Err(FingerprintError::InvalidConfig(_))));
    }
}
