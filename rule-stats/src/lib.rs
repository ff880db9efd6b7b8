//! Rule Statistics Library
//!
//! Descriptive statistics for a moderation dataset: a labeled training table
//! of posts annotated with a `rule` and a binary `rule_violation`, plus an
//! unlabeled test table.
//!
//! # Architecture
//!
//! The library is a single linear pass:
//! - Loads both tables fully into memory (read-only afterwards)
//! - Counts samples per rule and distinct rules/subreddits
//! - Computes overall and per-rule violation rates
//! - Classifies whether the data supports traditional supervised learning
//! - Prints each section as it is computed and returns a [`Report`]
//!
//! Argument parsing, configuration files and logging setup live in the
//! application layer (rule-stats-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use rule_stats::{ReportConfig, ReportGenerator};
//!
//! let config = ReportConfig::new()
//!     .with_train_path("Data/train.csv")
//!     .with_test_path("Data/test.csv")
//!     .with_sample_rows(5);
//!
//! let report = ReportGenerator::new(config)
//!     .generate(&mut std::io::stdout().lock())
//!     .unwrap();
//!
//! for (rule, count) in &report.samples_per_rule {
//!     println!("{rule}: {count}");
//! }
//! ```

// Public modules
pub mod config;
pub mod generator;
pub mod stats;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use config::{AssessmentThresholds, ReportConfig};
pub use generator::{generate_report, ReportGenerator};
pub use table::{Column, Table};
pub use types::{Assessment, Report, Result, RuleViolation, StatsError};

// Internal modules (not exposed in public API)
mod format;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
