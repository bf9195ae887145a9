use crate::config::AppConfig;
use crate::export::FingerprintExport;
use crate::fingerprint::Fingerprinter;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use crate::utils::threading::{FileResult, FingerprintPool};
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn run(
    config: &AppConfig,
    files: Vec<String>,
    sample: usize,
    threads: usize,
    output_file: Option<String>,
) -> Result<i32> {
    let fingerprinter = Fingerprinter::new(config.fingerprint.clone())?.with_sample_index(sample);
    let results = if threads <= 1 || files.len() == 1 {
        run_sequential(&fingerprinter, &files)?
    } else {
        run_parallel(&fingerprinter, &files, threads)?
    };

    let mut export = FingerprintExport::new(fingerprinter.config());
    let mut failures = 0;
    for (_, path, outcome) in &results {
        let source = path.display().to_string();
        match outcome {
            Ok(outcome) => {
                if !outcome.deterministic {
                    eprintln!(
                        "Warning: {} was sampled with random fill; its fingerprint will not reproduce",
                        source
                    );
                }
                println!("{}\t{}\t{}", outcome.fingerprint, outcome.format, source);
                export.push(&source, outcome);
            }
            Err(e) => {
                eprintln!("{}: {}", source, e);
                failures += 1;
            }
        }
    }

    if let Some(output_path) = output_file {
        export.write(Path::new(&output_path))?;
        println!("Report written to {}", output_path);
    }

    if failures == results.len() {
        bail!("No file could be fingerprinted");
    }
    Ok(if failures > 0 { 1 } else { 0 })
}

fn run_sequential(fingerprinter: &Fingerprinter, files: &[String]) -> Result<Vec<FileResult>> {
    let progress = ProgressBarBuilder::new("Fingerprinting")
        .with_length(files.len() as u64)
        .build()?;

    let mut results = Vec::with_capacity(files.len());
    for (idx, file) in files.iter().enumerate() {
        let path = PathBuf::from(file);
        progress.set_message(format!("Fingerprinting {}", path.display()));
        let outcome = fingerprinter.fingerprint_path(&path);
        results.push((idx, path, outcome));
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(results)
}

fn run_parallel(
    fingerprinter: &Fingerprinter,
    files: &[String],
    threads: usize,
) -> Result<Vec<FileResult>> {
    let progress = ProgressBarBuilder::new(format!(
        "Fingerprinting {} files on {} threads",
        files.len(),
        threads
    ))
    .with_tick(Duration::from_millis(200))
    .build()?;

    let mut pool = FingerprintPool::new(fingerprinter, threads);
    for file in files {
        pool.send(PathBuf::from(file))?;
    }
    let results = pool.finish()?;

    progress.finish_and_clear();
    Ok(results)
}
