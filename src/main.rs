use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ris2dspace::config::{
    DEFAULT_BASE_DIR, DEFAULT_NATIVE_LOCALE, DEFAULT_OUTPUT_FILE_NAME, DEFAULT_RIS_EXTENSION,
    DEFAULT_ROMANIZED_LOCALE,
};
use ris2dspace::{BatchConfig, BatchConverter, GroupOutcome, Locales};
use tracing_subscriber::EnvFilter;

/// Convert RIS exports into DSpace metadata.csv tables, one per item directory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing one subdirectory per item
    #[arg(default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// File name of the table written into each item directory
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE_NAME)]
    output_name: String,

    /// Extension of the RIS export inside each item directory
    #[arg(long, default_value = DEFAULT_RIS_EXTENSION)]
    extension: String,

    /// Number of worker threads (0 = number of CPUs)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Locale code for original-script columns
    #[arg(long, default_value = DEFAULT_NATIVE_LOCALE)]
    native_locale: String,

    /// Locale code for romanized columns
    #[arg(long, default_value = DEFAULT_ROMANIZED_LOCALE)]
    romanized_locale: String,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = BatchConfig::new();
    config
        .set_base_dir(&cli.base_dir)
        .set_output_file_name(cli.output_name)
        .set_ris_extension(&cli.extension)
        .set_jobs(cli.jobs)
        .set_locales(Locales::new(cli.native_locale, cli.romanized_locale));

    let report = BatchConverter::new(config)
        .run()
        .with_context(|| format!("failed to convert {}", cli.base_dir.display()))?;

    for outcome in &report.outcomes {
        if let GroupOutcome::Failed { dir, error } = outcome {
            eprintln!("{}: {error}", dir.display());
        }
    }
    println!(
        "{} written, {} skipped, {} failed",
        report.written(),
        report.skipped(),
        report.failed()
    );

    Ok(if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
