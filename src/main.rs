use clap::Parser;
use env_logger::{Builder, Env};
use genome_fingerprint::cli::{self, Commands};
use genome_fingerprint::commands;
use genome_fingerprint::config::AppConfig;
use std::path::Path;

fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(Path::new(path)),
        None => Ok(AppConfig::load()),
    }
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();

    let result = load_config(args.config.as_deref()).and_then(|config| match args.command {
        Commands::Fingerprint {
            files,
            sample,
            threads,
            output_file,
        } => commands::fingerprint::run(&config, files, sample, threads, output_file),
        Commands::Verify {
            file,
            expected,
            sample,
            strict,
        } => commands::verify::run(&config, file, expected, sample, strict),
        Commands::Duplicates {
            file,
            registry,
            sample,
        } => commands::duplicates::run(&config, file, registry, sample),
        Commands::Detect { file } => commands::detect::run(file),
    });

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
