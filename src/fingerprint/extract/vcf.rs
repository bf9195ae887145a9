use super::{Extraction, ExtractionStats};
use crate::error::{FingerprintError, Result};
use crate::types::{FileFormat, SnpRecord};
use std::io;

/// Fixed columns ahead of the first sample: CHROM..INFO plus FORMAT.
const FIXED_COLUMNS: usize = 9;
const MIN_SAMPLE_DEPTH: i64 = 10;
const MISSING: &str = ".";

/// Pulls fingerprint-eligible SNPs for one sample out of VCF-like text.
#[derive(Debug, Clone, Default)]
pub struct VariantCallExtractor {
    sample_index: usize,
}

enum LineVerdict {
    Keep(SnpRecord),
    NotPassing,
    NotSingleNucleotide,
    ReferenceOrMissing,
    LowDepth,
    Truncated,
}

impl VariantCallExtractor {
    pub fn new(sample_index: usize) -> Self {
        Self { sample_index }
    }

    pub fn extract<I>(&self, lines: I) -> Result<Extraction>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut stats = ExtractionStats::default();
        let mut records = Vec::new();
        let mut sample_column: Option<usize> = None;

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line?;
            let line_no = idx as u64 + 1;
            stats.lines_read += 1;

            if line.starts_with("##") || line.trim().is_empty() {
                continue;
            }
            if line.starts_with('#') {
                if line.starts_with("#CHROM") {
                    sample_column = Some(self.locate_sample(&line)?);
                }
                continue;
            }

            let column = sample_column.ok_or(FingerprintError::NoSamples)?;
            match classify_line(&line, line_no, column)? {
                LineVerdict::Keep(record) => records.push(record),
                LineVerdict::NotPassing => stats.skipped_filter += 1,
                LineVerdict::NotSingleNucleotide => stats.skipped_allele += 1,
                LineVerdict::ReferenceOrMissing => stats.skipped_genotype += 1,
                LineVerdict::LowDepth => stats.skipped_depth += 1,
                LineVerdict::Truncated => stats.skipped_malformed += 1,
            }
        }

        if sample_column.is_none() {
            return Err(FingerprintError::NoSamples);
        }
        if records.is_empty() {
            return Err(FingerprintError::NoEligibleSnps {
                format: FileFormat::VariantCall,
            });
        }

        stats.candidates = records.len() as u64;
        log::debug!(
            "Variant-call extraction: {} candidates, {} skipped (filter {}, allele {}, genotype {}, depth {})",
            stats.candidates,
            stats.skipped(),
            stats.skipped_filter,
            stats.skipped_allele,
            stats.skipped_genotype,
            stats.skipped_depth
        );

        Ok(Extraction { records, stats })
    }

    fn locate_sample(&self, header: &str) -> Result<usize> {
        let columns = header.split('\t').count();
        let samples = columns.saturating_sub(FIXED_COLUMNS);
        if samples == 0 {
            return Err(FingerprintError::NoSamples);
        }
        if self.sample_index >= samples {
            return Err(FingerprintError::SampleIndexOutOfRange {
                index: self.sample_index,
                samples,
            });
        }
        Ok(FIXED_COLUMNS + self.sample_index)
    }
}

fn classify_line(line: &str, line_no: u64, sample_column: usize) -> Result<LineVerdict> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() <= sample_column {
        return Ok(LineVerdict::Truncated);
    }

    if fields[6] != "PASS" {
        return Ok(LineVerdict::NotPassing);
    }

    let reference = fields[3];
    let alternate = fields[4].split(',').next().unwrap_or(MISSING);
    if reference.len() != 1 || alternate.len() != 1 || reference == MISSING || alternate == MISSING
    {
        return Ok(LineVerdict::NotSingleNucleotide);
    }

    let format: Vec<&str> = fields[8].split(':').collect();
    let sample: Vec<&str> = fields[sample_column].split(':').collect();
    let subfield = |key: &str| {
        format
            .iter()
            .position(|&f| f == key)
            .and_then(|i| sample.get(i).copied())
    };

    let genotype = match subfield("GT") {
        Some(gt) if !is_reference_or_missing(gt) => gt,
        _ => return Ok(LineVerdict::ReferenceOrMissing),
    };

    if let Some(depth) = subfield("DP").and_then(|dp| dp.parse::<i64>().ok()) {
        if depth < MIN_SAMPLE_DEPTH {
            return Ok(LineVerdict::LowDepth);
        }
    }

    let position = fields[1]
        .parse::<u64>()
        .map_err(|_| FingerprintError::Malformed {
            line: line_no,
            reason: format!("invalid POS '{}'", fields[1]),
        })?;
    let id = Some(fields[2]).filter(|id| !id.is_empty() && *id != MISSING);

    Ok(LineVerdict::Keep(SnpRecord::from_variant_call(
        fields[0], position, id, genotype, reference, alternate,
    )))
}

fn is_reference_or_missing(genotype: &str) -> bool {
    matches!(genotype, "0/0" | "0|0" | "./." | ".|." | "0" | ".")
}
