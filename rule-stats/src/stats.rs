//! Grouping and counting over table columns
//!
//! Two orderings appear in the report and they are deliberately different:
//! [`value_counts`] sorts by descending count, while [`unique`] and
//! [`violation_rates_by_rule`] keep the order values were first seen.

use crate::config::AssessmentThresholds;
use crate::table::{is_null, Column};
use crate::types::{Assessment, Result, RuleViolation, StatsError};
use std::collections::HashMap;

/// Distinct non-null values in first-seen order, with their counts
fn counts_in_order<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for value in values.into_iter().filter(|v| !is_null(v)) {
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

/// Count rows per distinct value, largest count first
///
/// Ties keep first-seen order. Missing cells are not counted.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = counts_in_order(values)
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();

    // Stable sort: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Distinct non-null values in first-seen order
pub fn unique<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    counts_in_order(values).into_iter().map(|(v, _)| v).collect()
}

/// Number of distinct non-null values
pub fn nunique<'a>(values: impl IntoIterator<Item = &'a str>) -> usize {
    counts_in_order(values).len()
}

/// Interpret one `rule_violation` cell as 0 or 1
///
/// Integer and float spellings (`1`, `1.0`) are accepted; anything else,
/// including a missing cell, is rejected.
pub fn parse_violation(cell: &str, row: usize, column: &str) -> Result<u8> {
    let invalid = || StatsError::InvalidValue {
        row,
        column: column.to_string(),
        value: cell.to_string(),
    };

    match cell.trim() {
        "0" => Ok(0),
        "1" => Ok(1),
        other => match other.parse::<f64>() {
            Ok(v) if v == 0.0 => Ok(0),
            Ok(v) if v == 1.0 => Ok(1),
            _ => Err(invalid()),
        },
    }
}

/// Parse every label in a column, failing on the first bad cell
pub fn parse_violations(labels: &Column<'_>) -> Result<Vec<u8>> {
    labels
        .iter()
        .enumerate()
        .map(|(row, cell)| parse_violation(cell, row, labels.name()))
        .collect()
}

/// Arithmetic mean of 0/1 labels; 0.0 when there are none
pub fn mean(labels: &[u8]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let positives: usize = labels.iter().map(|&l| l as usize).sum();
    positives as f64 / labels.len() as f64
}

/// Mean of the `rule_violation` column over all rows
pub fn mean_violation(labels: &Column<'_>) -> Result<f64> {
    Ok(mean(&parse_violations(labels)?))
}

/// Violation rate and row count for each rule, in first-seen rule order
///
/// Rows whose rule cell is missing belong to no group.
pub fn violation_rates_by_rule(
    rules: &Column<'_>,
    labels: &Column<'_>,
) -> Result<Vec<RuleViolation>> {
    let parsed = parse_violations(labels)?;

    let mut groups: Vec<(&str, usize, usize)> =
        unique(rules.iter()).into_iter().map(|rule| (rule, 0, 0)).collect();
    let positions: HashMap<&str, usize> = groups
        .iter()
        .enumerate()
        .map(|(pos, (rule, _, _))| (*rule, pos))
        .collect();

    for (rule, label) in rules.iter().zip(parsed.iter()) {
        // Missing rules have no position and belong to no group
        if let Some(&pos) = positions.get(rule) {
            let group = &mut groups[pos];
            group.1 += 1;
            group.2 += *label as usize;
        }
    }

    let rates = groups
        .into_iter()
        .map(|(rule, count, positives)| {
            log::debug!("Rule {:?}: {} of {} rows in violation", rule, positives, count);
            RuleViolation {
                rule: rule.to_string(),
                rate: positives as f64 / count as f64,
                count,
            }
        })
        .collect();

    Ok(rates)
}

/// Smallest and largest per-rule count; (0, 0) when there are no rules
pub fn min_max_counts(samples_per_rule: &[(String, usize)]) -> (usize, usize) {
    let counts = samples_per_rule.iter().map(|(_, c)| *c);
    let min = counts.clone().min().unwrap_or(0);
    let max = counts.max().unwrap_or(0);
    (min, max)
}

impl Assessment {
    /// Classify a training set; the first matching tier wins
    pub fn classify(total: usize, min_per_rule: usize, thresholds: &AssessmentThresholds) -> Self {
        if total < thresholds.min_total {
            Assessment::VeryLimited
        } else if min_per_rule < thresholds.min_per_rule {
            Assessment::Imbalanced
        } else {
            Assessment::Sufficient
        }
    }
}
