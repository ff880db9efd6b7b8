//! Rule Statistics CLI Application
//!
//! Command-line front end for the rule-stats library. Run with no arguments
//! to report on `Data/train.csv` and `Data/test.csv`. It adds:
//! - Optional TOML configuration
//! - Path overrides for the two input tables
//! - Log verbosity control (logs go to stderr, the report to stdout)

use anyhow::{Context, Result};
use clap::Parser;
use rule_stats::{ReportConfig, ReportGenerator};
use std::io;
use std::path::PathBuf;

mod config;

/// Rule Stats - Summarise a rule-violation dataset
#[derive(Parser, Debug)]
#[command(name = "rule-stats")]
#[command(about = "Print descriptive statistics for a rule-violation dataset", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the labeled training CSV (default: Data/train.csv)
    #[arg(long, value_name = "FILE")]
    train: Option<PathBuf>,

    /// Path to the test CSV (default: Data/test.csv)
    #[arg(long, value_name = "FILE")]
    test: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Rule Stats CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using rule-stats library v{}", rule_stats::VERSION);

    let report_config = build_report_config(&args)?;
    log::debug!("Report configuration: {:?}", report_config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = ReportGenerator::new(report_config)
        .generate(&mut out)
        .context("Dataset report failed")?;

    log::info!(
        "Report complete: {} samples across {} rules",
        report.total_samples,
        report.unique_rules
    );

    Ok(())
}

/// Merge the config file (if any) with command-line overrides
fn build_report_config(args: &Args) -> Result<ReportConfig> {
    let mut report_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?.to_report_config()
        }
        None => ReportConfig::default(),
    };

    if let Some(train) = &args.train {
        report_config.train_path = train.clone();
    }
    if let Some(test) = &args.test {
        report_config.test_path = test.clone();
    }

    Ok(report_config)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
