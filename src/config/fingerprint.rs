use crate::error::{FingerprintError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How consumer-genotype files are reduced to candidate SNPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerMode {
    /// Every line whose first field starts with `rs`.
    Prefix,
    /// Only the fixed marker panel, for strict cross-sample comparability.
    Panel,
}

/// How the sampler tops up a stride walk that fell short of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStrategy {
    /// Take the trailing unselected records in genome order.
    Deterministic,
    /// Draw unselected records at random. Fingerprints are then not reproducible.
    Random,
}

impl fmt::Display for ConsumerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConsumerMode::Prefix => "prefix",
            ConsumerMode::Panel => "panel",
        })
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FillStrategy::Deterministic => "deterministic",
            FillStrategy::Random => "random",
        })
    }
}

/// Pipeline parameters. Fixed per deployment: fingerprints computed under
/// different values are never comparable, which is why every export carries
/// [`FingerprintConfig::scheme_tag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerprintConfig {
    #[serde(default = "default_scheme_version")]
    pub scheme_version: u32,
    #[serde(default = "default_target_snp_count")]
    pub target_snp_count: usize,
    #[serde(default = "default_bloom_capacity")]
    pub bloom_capacity: usize,
    #[serde(default = "default_false_positive_rate")]
    pub false_positive_rate: f64,
    #[serde(default = "default_consumer_mode")]
    pub consumer_mode: ConsumerMode,
    #[serde(default = "default_fill_strategy")]
    pub fill_strategy: FillStrategy,
}

fn default_scheme_version() -> u32 {
    1
}

fn default_target_snp_count() -> usize {
    10_000
}

// Consumer files insert two keys per SNP (composite key + bare rsid).
fn default_bloom_capacity() -> usize {
    20_000
}

fn default_false_positive_rate() -> f64 {
    0.001
}

fn default_consumer_mode() -> ConsumerMode {
    ConsumerMode::Prefix
}

fn default_fill_strategy() -> FillStrategy {
    FillStrategy::Deterministic
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            scheme_version: default_scheme_version(),
            target_snp_count: default_target_snp_count(),
            bloom_capacity: default_bloom_capacity(),
            false_positive_rate: default_false_positive_rate(),
            consumer_mode: default_consumer_mode(),
            fill_strategy: default_fill_strategy(),
        }
    }
}

impl FingerprintConfig {
    pub fn with_target_snp_count(mut self, target: usize) -> Self {
        self.target_snp_count = target;
        self
    }

    pub fn with_bloom(mut self, capacity: usize, false_positive_rate: f64) -> Self {
        self.bloom_capacity = capacity;
        self.false_positive_rate = false_positive_rate;
        self
    }

    pub fn with_consumer_mode(mut self, mode: ConsumerMode) -> Self {
        self.consumer_mode = mode;
        self
    }

    pub fn with_fill_strategy(mut self, strategy: FillStrategy) -> Self {
        self.fill_strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_snp_count == 0 {
            return Err(FingerprintError::InvalidConfig(
                "target_snp_count must be at least 1".to_string(),
            ));
        }
        if self.bloom_capacity == 0 {
            return Err(FingerprintError::InvalidConfig(
                "bloom_capacity must be at least 1".to_string(),
            ));
        }
        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(FingerprintError::InvalidConfig(format!(
                "false_positive_rate must lie strictly between 0 and 1, got {}",
                self.false_positive_rate
            )));
        }
        Ok(())
    }

    /// Stable description of every parameter that influences fingerprint bytes.
    pub fn scheme_tag(&self) -> String {
        format!(
            "v{}:n{}:c{}:p{}:{}:{}",
            self.scheme_version,
            self.target_snp_count,
            self.bloom_capacity,
            self.false_positive_rate,
            self.consumer_mode,
            self.fill_strategy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_tag() {
        assert_eq!(
            FingerprintConfig::default().scheme_tag(),
            "v1:n10000:c20000:p0.001:prefix:deterministic"
        );
    }

    #[test]
    fn every_parameter_shows_in_scheme_tag() {
        let config = FingerprintConfig::default()
            .with_target_snp_count(50)
            .with_bloom(100, 0.01)
            .with_consumer_mode(ConsumerMode::Panel)
            .with_fill_strategy(FillStrategy::Random);
        assert_eq!(config.fill_strategy, FillStrategy::Random);
        assert_eq!(config.scheme_tag(), "v1:n50:c100:p0.01:panel:random");
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(FingerprintConfig::default().validate().is_ok());
        assert!(FingerprintConfig::default()
            .with_target_snp_count(0)
            .validate()
            .is_err());
        assert!(FingerprintConfig::default()
            .with_bloom(0, 0.01)
            .validate()
            .is_err());
        assert!(FingerprintConfig::default()
            .with_bloom(100, 1.0)
            .validate()
            .is_err());
        assert!(FingerprintConfig::default()
            .with_bloom(100, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: FingerprintConfig =
            toml::from_str("target_snp_count = 50\nconsumer_mode = \"panel\"").unwrap();
        assert_eq!(config.target_snp_count, 50);
        assert_eq!(config.consumer_mode, ConsumerMode::Panel);
        assert_eq!(config.bloom_capacity, 20_000);
        assert_eq!(config.fill_strategy, FillStrategy::Deterministic);
    }
}
