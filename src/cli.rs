use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Fingerprint configuration file (defaults to the per-user config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute fingerprints for one or more VCF / consumer genotype files
    Fingerprint {
        /// Input files (plain or gzip-compressed)
        #[arg(required = true)]
        files: Vec<String>,

        /// Sample column to use for multi-sample VCF input (0-based)
        #[arg(long, default_value = "0")]
        sample: usize,

        /// Number of files fingerprinted concurrently
        #[arg(short = 't', long, default_value = "1")]
        threads: usize,

        /// Write a JSON report of the results
        #[arg(short = 'o', long = "output")]
        output_file: Option<String>,
    },

    /// Check a file against a previously recorded fingerprint
    Verify {
        /// Input file
        file: String,
        /// Expected fingerprint (64 hex characters)
        expected: String,
        /// Sample column for VCF input (0-based)
        #[arg(long, default_value = "0")]
        sample: usize,
        /// Exit with status 2 on mismatch
        #[arg(long)]
        strict: bool,
    },

    /// Look up a file's fingerprint in the registry
    Duplicates {
        /// Input file
        file: String,
        /// Registry base URL (overrides the config file)
        #[arg(long)]
        registry: Option<String>,
        /// Sample column for VCF input (0-based)
        #[arg(long, default_value = "0")]
        sample: usize,
    },

    /// Report the detected input format
    Detect {
        /// Input file
        file: String,
    },
}
