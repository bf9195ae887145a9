use crate::error::FingerprintError;
use crate::fingerprint::{FingerprintOutcome, Fingerprinter};
use anyhow::{anyhow, Result};
use crossbeam_channel::{bounded, Sender};
use std::path::PathBuf;
use std::thread;

pub type FileResult = (usize, PathBuf, Result<FingerprintOutcome, FingerprintError>);

/// Runs independent fingerprinting pipelines on a fixed set of worker threads.
///
/// Each worker owns its own [`Fingerprinter`]; files are handed out over a
/// bounded channel and results are returned in submission order.
pub struct FingerprintPool {
    handles: Vec<thread::JoinHandle<Vec<FileResult>>>,
    tx: Sender<(usize, PathBuf)>,
    submitted: usize,
}

impl FingerprintPool {
    pub fn new(fingerprinter: &Fingerprinter, num_threads: usize) -> Self {
        let num_threads = num_threads.max(1);
        let (tx, rx) = bounded::<(usize, PathBuf)>(num_threads * 2);
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let rx = rx.clone();
            let worker = fingerprinter.clone();
            let handle = thread::spawn(move || {
                let mut results = Vec::new();
                while let Ok((idx, path)) = rx.recv() {
                    let outcome = worker.fingerprint_path(&path);
                    if let Err(e) = &outcome {
                        log::debug!("{}: {}", path.display(), e);
                    }
                    results.push((idx, path, outcome));
                }
                results
            });
            handles.push(handle);
        }

        FingerprintPool {
            handles,
            tx,
            submitted: 0,
        }
    }

    pub fn send(&mut self, path: PathBuf) -> Result<()> {
        self.tx.send((self.submitted, path))?;
        self.submitted += 1;
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<FileResult>> {
        drop(self.tx);

        let mut results = Vec::with_capacity(self.submitted);
        for handle in self.handles {
            let worker_results = handle
                .join()
                .map_err(|_| anyhow!("Fingerprint worker thread panicked"))?;
            results.extend(worker_results);
        }
        results.sort_by_key(|(idx, _, _)| *idx);
        Ok(results)
    }
}
