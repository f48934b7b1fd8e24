//! The fixed rule set.
//!
//! Rules run only for fields that are actually mapped, in catalog rule order
//! (price, area, status), then row order within each rule, so repeated runs
//! over the same dataset produce the same issue list. Validation is pure: it
//! never mutates the dataset, and empty or missing cells are not findings
//! (completeness is the mapper's concern).

use dataprep_model::{CANONICAL_STATUSES, ColumnMapping, Dataset, ValidationIssue};
use tracing::debug;

/// Computes the full issue list for a dataset under a mapping.
pub fn validate(dataset: &Dataset, mapping: &ColumnMapping) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(column) = mapping.column_for("price") {
        check_numeric(dataset, column, "price", &mut issues);
    }
    if let Some(column) = mapping.column_for("area") {
        check_numeric(dataset, column, "area", &mut issues);
    }
    if let Some(column) = mapping.column_for("status") {
        check_status(dataset, column, &mut issues);
    }

    debug!(issues = issues.len(), "validation pass complete");
    issues
}

fn check_numeric(dataset: &Dataset, column: &str, label: &str, issues: &mut Vec<ValidationIssue>) {
    for (index, _) in dataset.rows.iter().enumerate() {
        let raw = dataset.cell_text(index, column);
        if raw.trim().is_empty() {
            continue;
        }
        if parse_lenient_number(&raw).is_none() {
            issues.push(ValidationIssue::new(
                index + 1,
                column,
                format!("Invalid {label} format: \"{raw}\""),
            ));
        }
    }
}

fn check_status(dataset: &Dataset, column: &str, issues: &mut Vec<ValidationIssue>) {
    for (index, _) in dataset.rows.iter().enumerate() {
        let raw = dataset.cell_text(index, column);
        if raw.trim().is_empty() {
            continue;
        }
        if !CANONICAL_STATUSES.contains(&raw.trim()) {
            issues.push(ValidationIssue::new(
                index + 1,
                column,
                format!("Invalid status value: \"{raw}\""),
            ));
        }
    }
}

/// Accepts plain numbers plus the formatted shapes the cleanup stage emits:
/// thousand separators and an optional `EGP` prefix.
fn parse_lenient_number(raw: &str) -> Option<f64> {
    let stripped = raw
        .trim()
        .trim_start_matches("EGP")
        .trim()
        .replace(',', "");
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|value| value.is_finite())
}
