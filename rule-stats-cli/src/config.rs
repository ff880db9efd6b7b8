//! Configuration loading and parsing
//!
//! Every section is optional; an empty file yields the default report.

use anyhow::{Context, Result};
use rule_stats::ReportConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportSectionConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub train: Option<PathBuf>,
    pub test: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportSectionConfig {
    pub sample_rows: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThresholdsConfig {
    pub min_total: Option<usize>,
    pub min_per_rule: Option<usize>,
}

impl AppConfig {
    /// Overlay the values set in this file onto the library defaults
    pub fn to_report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::default();

        if let Some(train) = &self.input.train {
            config.train_path = train.clone();
        }
        if let Some(test) = &self.input.test {
            config.test_path = test.clone();
        }
        if let Some(rows) = self.report.sample_rows {
            config.sample_rows = rows;
        }
        if let Some(min_total) = self.thresholds.min_total {
            config.thresholds.min_total = min_total;
        }
        if let Some(min_per_rule) = self.thresholds.min_per_rule {
            config.thresholds.min_per_rule = min_per_rule;
        }

        config
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
