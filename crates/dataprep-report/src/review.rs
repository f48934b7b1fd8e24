//! Aggregation of mapping completeness, recorded work, and open findings
//! into a single reviewable summary.

use std::collections::BTreeSet;

use dataprep_model::{
    CleanupAction, ColumnMapping, Dataset, Transformation, ValidationIssue, schema_fields,
};
use serde::Serialize;
use tracing::info;

/// Everything an operator signs off on before committing an import.
///
/// Derived, never stored: rebuild it whenever any input changes.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub total_fields: usize,
    pub mapped_fields: usize,
    pub missing_required: Vec<&'static str>,
    pub unmapped_columns: Vec<String>,
    pub transformation_count: usize,
    /// Distinct columns read or written by the recorded transformations.
    pub touched_columns: Vec<String>,
    pub cleanup_count: usize,
    pub issue_count: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ReviewSummary {
    /// True when nothing blocks the import: every required field is mapped
    /// and no validation issue is open.
    pub fn is_ready(&self) -> bool {
        self.missing_required.is_empty() && self.issues.is_empty()
    }
}

/// Builds the review summary from the pipeline's current state.
pub fn summarize(
    dataset: &Dataset,
    mapping: &ColumnMapping,
    transformations: &[Transformation],
    cleanup_actions: &[CleanupAction],
    issues: &[ValidationIssue],
) -> ReviewSummary {
    let touched: BTreeSet<String> = transformations
        .iter()
        .flat_map(|t| t.kind.touched_columns())
        .map(ToString::to_string)
        .collect();

    let summary = ReviewSummary {
        row_count: dataset.row_count(),
        column_count: dataset.column_count(),
        total_fields: schema_fields().len(),
        mapped_fields: mapping.mapped_count(),
        missing_required: mapping.missing_required(),
        unmapped_columns: mapping
            .unmapped_columns(&dataset.columns)
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        transformation_count: transformations.len(),
        touched_columns: touched.into_iter().collect(),
        cleanup_count: cleanup_actions.len(),
        issue_count: issues.len(),
        issues: issues.to_vec(),
    };
    info!(
        rows = summary.row_count,
        issues = summary.issue_count,
        ready = summary.is_ready(),
        "review summary built"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataprep_model::{
        CellValue, CleanupKind, Row, Scope, SplitPosition, TransformationKind,
    };

    fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
        let mut out = Dataset::new(columns.iter().map(ToString::to_string).collect());
        for cells in rows {
            let row: Row = columns
                .iter()
                .zip(cells.iter())
                .map(|(column, value)| (column.to_string(), CellValue::Text(value.to_string())))
                .collect();
            out.push_row(row);
        }
        out
    }

    #[test]
    fn aggregates_counts_and_touched_columns() {
        let data = dataset(&["Unit", "Price", "Status"], &[&["A-1", "5", "Available"]]);
        let mut mapping = ColumnMapping::new();
        mapping.set("unit_code", Some("Unit")).expect("valid");
        mapping.set("price", Some("Price")).expect("valid");

        let transformations = vec![
            Transformation::new(
                TransformationKind::Split {
                    column: "Unit".into(),
                    delimiter: "-".into(),
                    position: SplitPosition::First,
                    new_column: "Prefix".into(),
                    keep_original: true,
                },
                Scope::All,
            ),
            Transformation::new(
                TransformationKind::ConditionalUpdate {
                    target_column: "Status".into(),
                    new_value: "Sold".into(),
                    filter_chain: Vec::new(),
                },
                Scope::All,
            ),
        ];
        let cleanup = vec![CleanupAction::new(1, CleanupKind::FormatCurrency, "Price")];
        let issues = vec![ValidationIssue::new(1, "Price", "Invalid price format: \"x\"")];

        let summary = summarize(&data, &mapping, &transformations, &cleanup, &issues);
        assert_eq!(summary.row_count, 1);
        assert_eq!(summary.mapped_fields, 2);
        assert!(summary.missing_required.is_empty());
        assert_eq!(summary.unmapped_columns, vec!["Status"]);
        assert_eq!(summary.transformation_count, 2);
        assert_eq!(summary.touched_columns, vec!["Prefix", "Status", "Unit"]);
        assert_eq!(summary.cleanup_count, 1);
        assert_eq!(summary.issue_count, 1);
        assert!(!summary.is_ready());
    }

    #[test]
    fn ready_requires_required_fields_and_zero_issues() {
        let data = dataset(&["Unit", "Price"], &[&["A-1", "5"]]);
        let mut mapping = ColumnMapping::new();
        mapping.set("unit_code", Some("Unit")).expect("valid");

        let summary = summarize(&data, &mapping, &[], &[], &[]);
        assert_eq!(summary.missing_required, vec!["price"]);
        assert!(!summary.is_ready());

        mapping.set("price", Some("Price")).expect("valid");
        let summary = summarize(&data, &mapping, &[], &[], &[]);
        assert!(summary.is_ready());
    }
}
