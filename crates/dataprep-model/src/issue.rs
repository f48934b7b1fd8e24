//! Derived data-quality findings.

use serde::{Deserialize, Serialize};

/// A single validation finding.
///
/// Issues are derived, never stored as dataset mutations, and carry the raw
/// column name (not the schema field id). `PartialEq` lets the revalidation
/// gate compare freshly computed lists structurally against the previous run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 1-based row number.
    pub row: usize,
    /// Raw dataset column name.
    pub column: String,
    /// Human-readable message embedding the offending value.
    pub issue: String,
}

impl ValidationIssue {
    pub fn new(row: usize, column: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
            issue: issue.into(),
        }
    }
}
