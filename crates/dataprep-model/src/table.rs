//! The in-memory table that flows through the pipeline.
//!
//! A [`Dataset`] is an ordered header plus ordered rows of named cells.
//! Missing values are stored explicitly as [`CellValue::Missing`] so that
//! row/column indexing stays stable across operations that add or remove
//! columns mid-pipeline. Every mutating pipeline stage works on a deep copy
//! (`Clone`), never on shared memory, so "original" and "current" views can
//! coexist for undo and side-by-side comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl CellValue {
    /// Stringified form used by predicates, transformations, and export.
    ///
    /// Integral numbers render without a trailing `.0`; missing renders as
    /// the empty string.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => render_number(*value),
            Self::Bool(value) => value.to_string(),
            Self::Missing => String::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

fn render_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// A row maps column names to cell values.
pub type Row = BTreeMap<String, CellValue>;

/// Ordered columns plus ordered rows of named cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, column), if the row exists and carries the entry.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Stringified cell value; empty string for absent rows or cells.
    pub fn cell_text(&self, row: usize, column: &str) -> String {
        self.cell(row, column)
            .map(CellValue::render)
            .unwrap_or_default()
    }

    /// Adds a column to the header if absent and seeds every row with `fill`.
    ///
    /// Rows that already carry an entry for the column keep their value.
    pub fn ensure_column(&mut self, name: &str, fill: &CellValue) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
        for row in &mut self.rows {
            row.entry(name.to_string()).or_insert_with(|| fill.clone());
        }
    }

    /// Drops a column from the header and from every row.
    pub fn drop_column(&mut self, name: &str) {
        self.columns.retain(|column| column != name);
        for row in &mut self.rows {
            row.remove(name);
        }
    }

    /// Restores the structural invariant: every row carries an explicit
    /// entry for every header column and no entries for anything else.
    pub fn normalize(&mut self) {
        for row in &mut self.rows {
            for column in &self.columns {
                row.entry(column.clone()).or_insert(CellValue::Missing);
            }
            row.retain(|name, _| self.columns.iter().any(|column| column == name));
        }
    }

    /// True when every row carries exactly the header columns.
    pub fn is_normalized(&self) -> bool {
        self.rows.iter().all(|row| {
            row.len() == self.columns.len()
                && self.columns.iter().all(|column| row.contains_key(column))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entries: &[(&str, CellValue)]) -> Row {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn render_covers_all_variants() {
        assert_eq!(CellValue::Text("abc".into()).render(), "abc");
        assert_eq!(CellValue::Number(120.0).render(), "120");
        assert_eq!(CellValue::Number(1.5).render(), "1.5");
        assert_eq!(CellValue::Bool(true).render(), "true");
        assert_eq!(CellValue::Missing.render(), "");
    }

    #[test]
    fn normalize_fills_missing_and_drops_strays() {
        let mut dataset = Dataset::new(vec!["A".into(), "B".into()]);
        dataset.push_row(row(&[
            ("A", CellValue::Text("1".into())),
            ("Z", CellValue::Text("stray".into())),
        ]));
        dataset.normalize();

        assert!(dataset.is_normalized());
        assert_eq!(dataset.cell(0, "B"), Some(&CellValue::Missing));
        assert_eq!(dataset.cell(0, "Z"), None);
    }

    #[test]
    fn ensure_column_keeps_existing_values() {
        let mut dataset = Dataset::new(vec!["A".into()]);
        dataset.push_row(row(&[("A", CellValue::Text("x".into()))]));
        dataset.push_row(row(&[
            ("A", CellValue::Text("y".into())),
            ("B", CellValue::Text("kept".into())),
        ]));
        dataset.ensure_column("B", &CellValue::Text(String::new()));

        assert_eq!(dataset.columns, vec!["A", "B"]);
        assert_eq!(dataset.cell_text(0, "B"), "");
        assert_eq!(dataset.cell_text(1, "B"), "kept");
    }

    #[test]
    fn drop_column_removes_header_and_cells() {
        let mut dataset = Dataset::new(vec!["A".into(), "B".into()]);
        dataset.push_row(row(&[
            ("A", CellValue::Text("1".into())),
            ("B", CellValue::Text("2".into())),
        ]));
        dataset.drop_column("A");

        assert_eq!(dataset.columns, vec!["B"]);
        assert_eq!(dataset.cell(0, "A"), None);
    }
}
