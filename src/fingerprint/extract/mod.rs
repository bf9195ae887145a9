//! SNP extraction strategies, one per input format.

mod consumer;
pub mod panel;
mod vcf;

pub use consumer::ConsumerGenotypeExtractor;
pub use vcf::VariantCallExtractor;

use crate::types::SnpRecord;

/// Line counters reported alongside the extracted candidates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionStats {
    pub lines_read: u64,
    pub candidates: u64,
    pub skipped_filter: u64,
    pub skipped_allele: u64,
    pub skipped_genotype: u64,
    pub skipped_depth: u64,
    pub skipped_malformed: u64,
}

impl ExtractionStats {
    pub fn skipped(&self) -> u64 {
        self.skipped_filter
            + self.skipped_allele
            + self.skipped_genotype
            + self.skipped_depth
            + self.skipped_malformed
    }
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<SnpRecord>,
    pub stats: ExtractionStats,
}
