//! Core types for the rule statistics library
//!
//! This module defines the error type shared by every stage of the report and
//! the structured result handed back to programmatic callers.

use serde::Serialize;
use std::fmt;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, StatsError>;

/// Column names the report depends on
pub mod columns {
    /// Moderation rule the post was annotated against
    pub const RULE: &str = "rule";
    /// Subreddit the post was made in
    pub const SUBREDDIT: &str = "subreddit";
    /// Binary label: 1 when the post breaks the rule
    pub const RULE_VIOLATION: &str = "rule_violation";
    /// Post text
    pub const BODY: &str = "body";
}

/// Errors that can occur while loading tables or computing the report
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// File missing, unreadable, or not parseable as a delimited table
    #[error("Failed to load table {origin}: {reason}")]
    DataLoad { origin: String, reason: String },

    /// A column needed by an aggregation is absent from the table
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),

    /// A cell could not be interpreted as the value its column requires
    #[error("Invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    /// Writing the report to its output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Heuristic verdict on whether the training set supports conventional
/// supervised learning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    /// Too few samples overall; every rule needs few-shot techniques
    VeryLimited,
    /// Enough samples overall, but at least one rule is under-represented
    Imbalanced,
    /// Every rule has enough samples for a traditional classifier
    Sufficient,
}

impl Assessment {
    /// Text printed in the ASSESSMENT section
    pub fn label(&self) -> &'static str {
        match self {
            Assessment::VeryLimited => "VERY LIMITED DATA - Pure few-shot learning required",
            Assessment::Imbalanced => "IMBALANCED - Some rules need few-shot approaches",
            Assessment::Sufficient => "SUFFICIENT - Traditional ML possible",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Violation statistics for the rows sharing one rule value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleViolation {
    pub rule: String,
    /// Mean of `rule_violation` over the rule's rows, in [0, 1]
    pub rate: f64,
    /// Number of rows carrying this rule
    pub count: usize,
}

/// Statistics computed by one report run
///
/// Mirrors what is printed, so callers using the library directly get the
/// same numbers without scraping text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of rows in the training table
    pub total_samples: usize,
    /// Distinct non-null `rule` values
    pub unique_rules: usize,
    /// Distinct non-null `subreddit` values
    pub unique_subreddits: usize,
    /// Rule → row count, largest first (ties keep first-seen order)
    pub samples_per_rule: Vec<(String, usize)>,
    /// Mean of `rule_violation` over all training rows
    pub violation_rate: f64,
    /// Per-rule violation rates, in first-seen rule order
    pub rule_violation_rates: Vec<RuleViolation>,
    pub min_per_rule: usize,
    pub max_per_rule: usize,
    pub assessment: Assessment,
}

impl Report {
    /// Row count recorded for `rule`, if it appeared in the table
    pub fn samples_for(&self, rule: &str) -> Option<usize> {
        self.samples_per_rule
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, count)| *count)
    }

    /// Violation statistics recorded for `rule`, if it appeared in the table
    pub fn violation_for(&self, rule: &str) -> Option<&RuleViolation> {
        self.rule_violation_rates.iter().find(|r| r.rule == rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_labels() {
        assert!(Assessment::VeryLimited.label().starts_with("VERY LIMITED DATA"));
        assert!(Assessment::Imbalanced.label().starts_with("IMBALANCED"));
        assert_eq!(
            Assessment::Sufficient.to_string(),
            "SUFFICIENT - Traditional ML possible"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = StatsError::MissingColumn("rule_violation".to_string());
        assert_eq!(err.to_string(), "Missing required column: 'rule_violation'");

        let err = StatsError::InvalidValue {
            row: 4,
            column: "rule_violation".to_string(),
            value: "maybe".to_string(),
        };
        assert!(err.to_string().contains("\"maybe\""));
        assert!(err.to_string().contains("row 4"));
    }
}
