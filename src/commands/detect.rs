use crate::fingerprint::sniff_path;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(file: String) -> Result<i32> {
    let sniffed =
        sniff_path(Path::new(&file)).with_context(|| format!("Failed to read {}", file))?;
    if sniffed.is_fallback() {
        println!("{}\t{} (no format markers found)", file, sniffed.format);
    } else {
        println!("{}\t{}", file, sniffed.format);
    }
    Ok(0)
}
