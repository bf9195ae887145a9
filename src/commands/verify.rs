use crate::config::AppConfig;
use crate::fingerprint::{verify, Fingerprint, Fingerprinter, Verdict};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(
    config: &AppConfig,
    file: String,
    expected: String,
    sample: usize,
    strict: bool,
) -> Result<i32> {
    let reference: Fingerprint = expected
        .parse()
        .with_context(|| format!("Invalid reference fingerprint '{}'", expected))?;

    let outcome = Fingerprinter::new(config.fingerprint.clone())?
        .with_sample_index(sample)
        .fingerprint_path(Path::new(&file))
        .with_context(|| format!("Failed to fingerprint {}", file))?;

    if !outcome.deterministic {
        eprintln!("Warning: random sampling fill was used; a mismatch may not indicate modification");
    }

    let verdict = verify(&outcome.fingerprint, &reference);
    println!("{}\t{}", verdict, outcome.fingerprint);

    Ok(match verdict {
        Verdict::Mismatch if strict => 2,
        _ => 0,
    })
}
