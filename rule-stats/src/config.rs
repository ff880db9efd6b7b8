//! Report configuration types
//!
//! Defaults reproduce the plain, argument-free run: `Data/train.csv` and
//! `Data/test.csv`, five sample rows, and the 1000 / 100 assessment cut-offs.

use crate::types::columns;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Labeled training table
    #[serde(default = "default_train_path")]
    pub train_path: PathBuf,

    /// Unlabeled test table (only its shape is reported)
    #[serde(default = "default_test_path")]
    pub test_path: PathBuf,

    /// Number of leading training rows shown at the end of the report
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,

    /// Columns shown for the sample rows
    #[serde(default = "default_sample_columns")]
    pub sample_columns: Vec<String>,

    /// Cut-offs for the data-sufficiency assessment
    #[serde(default)]
    pub thresholds: AssessmentThresholds,
}

fn default_train_path() -> PathBuf {
    PathBuf::from("Data/train.csv")
}

fn default_test_path() -> PathBuf {
    PathBuf::from("Data/test.csv")
}

fn default_sample_rows() -> usize {
    5
}

fn default_sample_columns() -> Vec<String> {
    [columns::RULE, columns::SUBREDDIT, columns::RULE_VIOLATION, columns::BODY]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Cut-offs used to classify the training set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentThresholds {
    /// Below this many rows in total, the data is "very limited"
    #[serde(default = "default_min_total")]
    pub min_total: usize,

    /// Below this many rows for the smallest rule, the data is "imbalanced"
    #[serde(default = "default_min_per_rule")]
    pub min_per_rule: usize,
}

fn default_min_total() -> usize {
    1000
}

fn default_min_per_rule() -> usize {
    100
}

impl Default for AssessmentThresholds {
    fn default() -> Self {
        Self {
            min_total: default_min_total(),
            min_per_rule: default_min_per_rule(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            train_path: default_train_path(),
            test_path: default_test_path(),
            sample_rows: default_sample_rows(),
            sample_columns: default_sample_columns(),
            thresholds: AssessmentThresholds::default(),
        }
    }
}

impl ReportConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the training table path
    pub fn with_train_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.train_path = path.into();
        self
    }

    /// Builder method: set the test table path
    pub fn with_test_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_path = path.into();
        self
    }

    /// Builder method: set how many sample rows are displayed
    pub fn with_sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = rows;
        self
    }

    /// Builder method: set the assessment cut-offs
    pub fn with_thresholds(mut self, min_total: usize, min_per_rule: usize) -> Self {
        self.thresholds = AssessmentThresholds {
            min_total,
            min_per_rule,
        };
        self
    }
}
