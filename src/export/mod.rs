mod fingerprint;

pub use fingerprint::{FileFingerprint, FingerprintStatistics};

use crate::config::FingerprintConfig;
use crate::fingerprint::FingerprintOutcome;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub const RECORD_TYPE: &str = "com.decodingus.genome.fingerprint";

/// JSON report for one fingerprinting invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct FingerprintExport {
    #[serde(rename = "$type")]
    pub record_type: String,

    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    /// Parameters the fingerprints were computed under; only fingerprints
    /// with identical schemes are comparable.
    pub scheme: String,

    pub files: Vec<FileFingerprint>,
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}

impl FingerprintExport {
    pub fn new(config: &FingerprintConfig) -> Self {
        Self {
            record_type: RECORD_TYPE.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            scheme: config.scheme_tag(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, source: &str, outcome: &FingerprintOutcome) {
        self.files.push(FileFingerprint::from_outcome(source, outcome));
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .context("Failed to write fingerprint report")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::{ExtractionStats, Fingerprint};
    use crate::types::FileFormat;

    fn outcome() -> FingerprintOutcome {
        FingerprintOutcome {
            fingerprint: Fingerprint::from_bytes([0x11; 32]),
            format: FileFormat::VariantCall,
            stats: ExtractionStats {
                lines_read: 120,
                candidates: 100,
                skipped_filter: 4,
                ..Default::default()
            },
            selected: 50,
            keys_inserted: 50,
            bits_set: 480,
            deterministic: true,
        }
    }

    #[test]
    fn writes_and_reads_back_report() {
        let mut export = FingerprintExport::new(&FingerprintConfig::default());
        export.push("sample.vcf.gz", &outcome());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        export.write(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["$type"], RECORD_TYPE);
        assert_eq!(value["scheme"], "v1:n10000:c20000:p0.001:prefix:deterministic");
        assert_eq!(value["files"][0]["hexdigest"], "11".repeat(32));
        assert_eq!(value["files"][0]["format"], "variant_call");
        assert_eq!(value["files"][0]["statistics"]["skipped"], 4);

        let parsed: FingerprintExport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.files[0].fingerprint, Fingerprint::from_bytes([0x11; 32]));
        assert_eq!(
            parsed.created_at.timestamp(),
            export.created_at.timestamp()
        );
    }
}
