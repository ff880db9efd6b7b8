//! Report generator
//!
//! [`ReportGenerator`] loads the two tables, prints each section as soon as it
//! is computed, and returns the numbers as a [`Report`]. Output is flushed
//! section by section, so anything printed before a failure stays visible.

use crate::config::ReportConfig;
use crate::format;
use crate::stats;
use crate::table::Table;
use crate::types::{columns, Assessment, Report, Result};
use std::io::{self, Write};

const TITLE: &str = "JIGSAW REDDIT DATASET ANALYSIS";

/// Produces the dataset report described by a [`ReportConfig`]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a generator for the given configuration
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load both tables from disk and write the report to `out`
    ///
    /// Both tables are loaded before anything is written, so a load failure
    /// produces no output at all.
    ///
    /// # Example
    /// ```no_run
    /// use rule_stats::{ReportConfig, ReportGenerator};
    ///
    /// let generator = ReportGenerator::new(ReportConfig::new());
    /// let report = generator.generate(&mut std::io::stdout().lock()).unwrap();
    /// println!("{} samples", report.total_samples);
    /// ```
    pub fn generate<W: Write>(&self, out: &mut W) -> Result<Report> {
        let train = Table::from_path(&self.config.train_path)?;
        let test = Table::from_path(&self.config.test_path)?;
        self.generate_from_tables(&train, &test, out)
    }

    /// Write the report for already-loaded tables
    pub fn generate_from_tables<W: Write>(
        &self,
        train: &Table,
        test: &Table,
        out: &mut W,
    ) -> Result<Report> {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", "=".repeat(50))?;

        // Shapes
        writeln!(out, "Train shape: {}", format::shape(train.shape()))?;
        writeln!(out, "Test shape: {}", format::shape(test.shape()))?;
        writeln!(out, "Train columns: {}", format::name_list(train.column_names()))?;
        out.flush()?;

        // Headline metrics
        let rules = train.column(columns::RULE)?;
        let subreddits = train.column(columns::SUBREDDIT)?;
        let total_samples = train.len();
        let unique_rules = stats::nunique(rules.iter());
        let unique_subreddits = stats::nunique(subreddits.iter());

        writeln!(out, "\nCRITICAL METRICS:")?;
        writeln!(out, "Total training samples: {}", format::thousands(total_samples))?;
        writeln!(out, "Unique rules: {}", unique_rules)?;
        writeln!(out, "Unique subreddits: {}", unique_subreddits)?;
        out.flush()?;

        // Samples per rule, largest first
        let samples_per_rule = stats::value_counts(rules.iter());
        writeln!(out, "\nSAMPLES PER RULE:")?;
        for (rule, count) in &samples_per_rule {
            writeln!(out, "  {}: {} samples", rule, format::thousands(*count))?;
        }
        out.flush()?;

        // Overall class balance
        let labels = train.column(columns::RULE_VIOLATION)?;
        let violation_rate = stats::mean_violation(&labels)?;
        writeln!(out, "\nCLASS BALANCE:")?;
        writeln!(out, "Violation rate: {}", format::rate(violation_rate))?;
        out.flush()?;

        // Per-rule rates, first-seen order
        let rule_violation_rates = stats::violation_rates_by_rule(&rules, &labels)?;
        writeln!(out, "\nVIOLATION RATES BY RULE:")?;
        for entry in &rule_violation_rates {
            writeln!(
                out,
                "  {}: {} - {} samples",
                entry.rule,
                format::rate(entry.rate),
                entry.count
            )?;
        }
        out.flush()?;

        // Assessment
        let (min_per_rule, max_per_rule) = stats::min_max_counts(&samples_per_rule);
        let assessment = Assessment::classify(total_samples, min_per_rule, &self.config.thresholds);
        log::debug!(
            "Assessment for {} samples (smallest rule {}): {:?}",
            total_samples,
            min_per_rule,
            assessment
        );

        writeln!(out, "\nASSESSMENT:")?;
        writeln!(out, "{}", assessment.label())?;
        writeln!(out, "Min samples per rule: {}", min_per_rule)?;
        writeln!(out, "Max samples per rule: {}", max_per_rule)?;
        out.flush()?;

        // Sample rows
        let head = train.head(self.config.sample_rows, &self.config.sample_columns)?;
        writeln!(out, "\nFIRST FEW TRAINING EXAMPLES:")?;
        writeln!(out, "{}", format::sample_table(&head))?;
        out.flush()?;

        Ok(Report {
            total_samples,
            unique_rules,
            unique_subreddits,
            samples_per_rule,
            violation_rate,
            rule_violation_rates,
            min_per_rule,
            max_per_rule,
            assessment,
        })
    }
}

/// Run the default report (`Data/train.csv`, `Data/test.csv`) to standard output
pub fn generate_report() -> Result<Report> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ReportGenerator::new(ReportConfig::default()).generate(&mut out)
}
