//! Genome-wide subset selection.
//!
//! Candidates are put in genome order and walked at a fixed stride, so the
//! selected subset spans every chromosome instead of the head of the file.

use crate::config::FillStrategy;
use crate::types::SnpRecord;
use rand::seq::index;

#[derive(Debug)]
pub struct Selection {
    pub records: Vec<SnpRecord>,
    /// Records drawn at random to cover a stride shortfall.
    pub random_fill: usize,
}

impl Selection {
    pub fn is_deterministic(&self) -> bool {
        self.random_fill == 0
    }
}

/// Reduce `candidates` to at most `target` records spread across the genome.
///
/// Candidate sets already within `target` pass through untouched.
pub fn select_genome_wide(
    mut candidates: Vec<SnpRecord>,
    target: usize,
    fill: FillStrategy,
) -> Selection {
    if candidates.len() <= target {
        return Selection {
            records: candidates,
            random_fill: 0,
        };
    }

    candidates.sort_by(|a, b| a.genome_order(b));
    let stride = (candidates.len() / target.max(1)).max(1);
    select_with_stride(candidates, target, stride, fill)
}

fn select_with_stride(
    sorted: Vec<SnpRecord>,
    target: usize,
    stride: usize,
    fill: FillStrategy,
) -> Selection {
    let mut picked = vec![false; sorted.len()];
    let mut selected = 0;
    let mut idx = 0;
    while selected < target && idx < sorted.len() {
        picked[idx] = true;
        selected += 1;
        idx += stride;
    }

    let shortfall = target.saturating_sub(selected);
    let mut random_fill = 0;
    if shortfall > 0 {
        let unselected: Vec<usize> = (0..sorted.len()).filter(|&i| !picked[i]).collect();
        let take = shortfall.min(unselected.len());
        match fill {
            FillStrategy::Deterministic => {
                for &i in &unselected[unselected.len() - take..] {
                    picked[i] = true;
                }
            }
            FillStrategy::Random => {
                log::warn!(
                    "Filling {} sampling slot(s) at random; this fingerprint is not reproducible",
                    take
                );
                for i in index::sample(&mut rand::rng(), unselected.len(), take) {
                    picked[unselected[i]] = true;
                }
                random_fill = take;
            }
        }
    }

    let records: Vec<SnpRecord> = sorted
        .into_iter()
        .zip(picked)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect();
    log::debug!(
        "Sampled {} of target {} at stride {} ({} random)",
        records.len(),
        target,
        stride,
        random_fill
    );

    Selection {
        records,
        random_fill,
    }
}
