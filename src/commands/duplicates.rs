use crate::config::AppConfig;
use crate::error::FingerprintError;
use crate::fingerprint::{find_duplicates, Fingerprinter};
use crate::registry::HttpRegistry;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

pub fn run(
    config: &AppConfig,
    file: String,
    registry_url: Option<String>,
    sample: usize,
) -> Result<i32> {
    let outcome = Fingerprinter::new(config.fingerprint.clone())?
        .with_sample_index(sample)
        .fingerprint_path(Path::new(&file))
        .with_context(|| format!("Failed to fingerprint {}", file))?;
    println!("{}\t{}\t{}", outcome.fingerprint, outcome.format, file);

    let registry = match registry_url {
        Some(url) => Some(HttpRegistry::new(
            &url,
            Duration::from_secs(config.registry.timeout_secs),
        )?),
        None => HttpRegistry::from_settings(&config.registry)?,
    };
    let Some(registry) = registry else {
        eprintln!("No registry configured; skipping duplicate check");
        return Ok(0);
    };

    match find_duplicates(&registry, &outcome.fingerprint) {
        Ok(report) if report.is_duplicate() => {
            println!("Duplicate of {} registered file(s):", report.duplicates.len());
            for record in &report.duplicates {
                println!(
                    "  {}\t{}\t{}\t{}",
                    record.owner,
                    record.created_at.to_rfc3339(),
                    record.storage_location,
                    record.biocid.as_deref().unwrap_or("-")
                );
            }
            Ok(0)
        }
        Ok(_) => {
            println!("No known duplicate");
            Ok(0)
        }
        Err(FingerprintError::RegistryUnavailable(reason)) => {
            eprintln!("Warning: registry unavailable ({}); duplicate check skipped", reason);
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}
