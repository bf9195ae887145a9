use super::panel::in_panel;
use super::{Extraction, ExtractionStats};
use crate::config::ConsumerMode;
use crate::error::{FingerprintError, Result};
use crate::types::{FileFormat, SnpRecord};
use std::collections::HashSet;
use std::io;

/// Prefix mode buffers at most `target * PREFIX_CAPACITY_FACTOR` candidates,
/// thinned evenly across the whole file.
pub const PREFIX_CAPACITY_FACTOR: usize = 100;

/// Permissive parser for consumer raw-data exports.
///
/// Handles the 23andMe layout (`rsid chrom pos genotype`), the AncestryDNA
/// layout (`rsid chrom pos allele1 allele2`) and the quoted comma-separated
/// FamilyTreeDNA / MyHeritage layout. Lines that don't fit are skipped, not
/// reported.
#[derive(Debug, Clone)]
pub struct ConsumerGenotypeExtractor {
    mode: ConsumerMode,
    capacity: usize,
}

impl ConsumerGenotypeExtractor {
    pub fn new(mode: ConsumerMode, target_snp_count: usize) -> Self {
        Self {
            mode,
            capacity: target_snp_count.saturating_mul(PREFIX_CAPACITY_FACTOR),
        }
    }

    pub fn extract<I>(&self, lines: I) -> Result<Extraction>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut stats = ExtractionStats::default();
        let mut records = Vec::new();
        let mut seen_panel: HashSet<String> = HashSet::new();
        // prefix mode keeps every `keep_every`-th eligible record
        let mut keep_every: usize = 1;
        let mut eligible: usize = 0;

        for line in lines {
            let line = line?;
            stats.lines_read += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields = split_fields(trimmed);
            let label = fields[0].as_str();
            if label.eq_ignore_ascii_case("rsid") {
                continue;
            }
            let wanted = match self.mode {
                ConsumerMode::Prefix => label.starts_with("rs"),
                ConsumerMode::Panel => in_panel(label),
            };
            if !wanted {
                continue;
            }

            let record = match parse_record(&fields) {
                Some(record) => record,
                None => {
                    log::debug!("Skipping malformed consumer line {}", stats.lines_read);
                    stats.skipped_malformed += 1;
                    continue;
                }
            };
            if is_no_call(&record.genotype) {
                stats.skipped_genotype += 1;
                continue;
            }

            match self.mode {
                ConsumerMode::Panel => {
                    if !seen_panel.insert(record.variant_label.clone()) {
                        continue;
                    }
                }
                ConsumerMode::Prefix => {
                    let keep = eligible % keep_every == 0;
                    eligible += 1;
                    if !keep {
                        continue;
                    }
                }
            }
            records.push(record);

            if self.mode == ConsumerMode::Prefix && records.len() >= self.capacity.max(2) {
                records = thin_by_half(records);
                keep_every *= 2;
                log::debug!(
                    "Candidate buffer full; keeping every {} eligible record",
                    keep_every
                );
            }
        }

        if stats.skipped_malformed > 0 {
            log::warn!(
                "Skipped {} malformed consumer genotype line(s)",
                stats.skipped_malformed
            );
        }
        if records.is_empty() {
            return Err(FingerprintError::NoEligibleSnps {
                format: FileFormat::ConsumerGenotype,
            });
        }

        stats.candidates = records.len() as u64;
        log::debug!(
            "Consumer extraction ({:?}): {} candidates from {} lines",
            self.mode,
            stats.candidates,
            stats.lines_read
        );

        Ok(Extraction { records, stats })
    }
}

fn thin_by_half(records: Vec<SnpRecord>) -> Vec<SnpRecord> {
    records.into_iter().step_by(2).collect()
}

fn split_fields(line: &str) -> Vec<String> {
    let raw: Vec<&str> = if line.contains('\t') {
        line.split('\t').collect()
    } else if line.contains(',') {
        line.split(',').collect()
    } else {
        line.split_whitespace().collect()
    };

    raw.into_iter()
        .map(|field| field.trim().trim_matches('"').to_string())
        .collect()
}

fn parse_record(fields: &[String]) -> Option<SnpRecord> {
    if fields.len() < 4 {
        return None;
    }
    let position = fields[2].parse::<u64>().ok()?;
    let genotype = if fields.len() >= 5 {
        format!("{}{}", fields[3], fields[4])
    } else {
        fields[3].clone()
    };

    Some(SnpRecord::from_consumer(
        &fields[0],
        &fields[1],
        position,
        &genotype,
    ))
}

fn is_no_call(genotype: &str) -> bool {
    genotype.is_empty() || genotype.chars().all(|c| c == '-' || c == '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<io::Result<String>> {
        text.lines().map(|l| Ok(l.to_string())).collect()
    }

    #[test]
    fn parses_23andme_layout() {
        let text = "# This data file generated by 23andMe\n\
                    # rsid\tchromosome\tposition\tgenotype\n\
                    rs4477212\t1\t82154\tAA\n\
                    \n\
                    rs3094315\t1\t752566\tAG\n\
                    i3000001\t1\t900000\tCC\n\
                    rs3131972\t1\t752721\t--";
        let extraction = ConsumerGenotypeExtractor::new(ConsumerMode::Prefix, 100)
            .extract(lines(text))
            .unwrap();
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].variant_label, "rs4477212");
        assert_eq!(extraction.records[1].genotype, "AG");
        assert_eq!(extraction.stats.skipped_genotype, 1);
    }

    #[test]
    fn joins_ancestry_alleles() {
        let text = "rsid\tchromosome\tposition\tallele1\tallele2\n\
                    rs4477212\t1\t82154\tA\tG\n\
                    rs3094315\t1\t752566\t0\t0";
        let extraction = ConsumerGenotypeExtractor::new(ConsumerMode::Prefix, 100)
            .extract(lines(text))
            .unwrap();
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].genotype, "AG");
        assert_eq!(extraction.stats.skipped_malformed, 0);
    }

    #[test]
    fn parses_quoted_csv_layout() {
        let text = "RSID,CHROMOSOME,POSITION,RESULT\n\
                    \"rs4477212\",\"1\",\"82154\",\"AA\"\n\
                    \"rs3094315\",\"1\",\"752566\",\"AG\"";
        let extraction = ConsumerGenotypeExtractor::new(ConsumerMode::Prefix, 100)
            .extract(lines(text))
            .unwrap();
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[1].position, 752_566);
    }

    #[test]
    fn panel_mode_keeps_only_panel_markers() {
        let text = "rs4477212\t1\t82154\tAA\n\
                    rs999999999\t1\t1000\tCT\n\
                    rs4988235\t2\t136608646\tAG\n\
                    rs4988235\t2\t136608646\tGG";
        let extraction = ConsumerGenotypeExtractor::new(ConsumerMode::Panel, 100)
            .extract(lines(text))
            .unwrap();
        let labels: Vec<&str> = extraction
            .records
            .iter()
            .map(|s| s.variant_label.as_str())
            .collect();
        assert_eq!(labels, vec!["rs4477212", "rs4988235"]);
        assert_eq!(extraction.records[1].genotype, "AG");
    }

    #[test]
    fn bad_positions_are_skipped_not_fatal() {
        let text = "rs4477212\t1\tnowhere\tAA\nrs3094315\t1\t752566\tAG";
        let extraction = ConsumerGenotypeExtractor::new(ConsumerMode::Prefix, 100)
            .extract(lines(text))
            .unwrap();
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.stats.skipped_malformed, 1);
    }

    #[test]
    fn prefix_mode_thins_evenly_at_capacity() {
        let text: String = (0..50)
            .map(|i| format!("rs{}\t1\t{}\tAG\n", i, i * 10))
            .collect();
        let mut extractor = ConsumerGenotypeExtractor::new(ConsumerMode::Prefix, 1);
        extractor.capacity = 20;
        let extraction = extractor.extract(lines(&text)).unwrap();

        // buffer fills at 20 (keep every 2nd), again at 40 (keep every 4th)
        let kept: Vec<u64> = extraction.records.iter().map(|s| s.position / 10).collect();
        assert_eq!(kept, vec![0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48]);
        assert_eq!(extraction.stats.candidates, 13);
    }

    #[test]
    fn only_comments_is_an_error() {
        let result = ConsumerGenotypeExtractor::new(ConsumerMode::Prefix, 100)
            .extract(lines("# nothing here\n\n"));
        assert!(matches!(
            result,
            Err(FingerprintError::NoEligibleSnps {
                format: FileFormat::ConsumerGenotype
            })
        ));
    }
}
