//! Logged cleanup/standardization actions.
//!
//! Simpler than transformations: always whole-column over all rows, no
//! undo/redo stack. Removal semantics live in the cleanup engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which fixed alias table a standardization action uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardTable {
    PropertyType,
    Finishing,
    Status,
}

impl StandardTable {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PropertyType => "property type",
            Self::Finishing => "finishing",
            Self::Status => "status",
        }
    }
}

/// The cleanup operation to run over a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum CleanupKind {
    FormatDate,
    FormatNumber,
    FormatCurrency,
    Standardize { table: StandardTable },
    Capitalize,
    Uppercase,
    Lowercase,
}

impl CleanupKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FormatDate => "Format Date",
            Self::FormatNumber => "Format Number",
            Self::FormatCurrency => "Format Currency",
            Self::Standardize { .. } => "Standardize",
            Self::Capitalize => "Capitalize",
            Self::Uppercase => "Uppercase",
            Self::Lowercase => "Lowercase",
        }
    }

    pub fn describe(&self, column: &str) -> String {
        match self {
            Self::FormatDate => format!("Formatted \"{column}\" as YYYY-MM-DD dates"),
            Self::FormatNumber => format!("Formatted \"{column}\" as thousand-separated numbers"),
            Self::FormatCurrency => format!("Formatted \"{column}\" as EGP currency amounts"),
            Self::Standardize { table } => format!(
                "Standardized \"{column}\" against the {} table",
                table.display_name()
            ),
            Self::Capitalize => format!("Capitalized each word in \"{column}\""),
            Self::Uppercase => format!("Uppercased \"{column}\""),
            Self::Lowercase => format!("Lowercased \"{column}\""),
        }
    }
}

/// A logged cleanup action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupAction {
    pub id: u64,
    pub kind: CleanupKind,
    pub column: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl CleanupAction {
    pub fn new(id: u64, kind: CleanupKind, column: impl Into<String>) -> Self {
        let column = column.into();
        let description = kind.describe(&column);
        Self {
            id,
            kind,
            column,
            description,
            timestamp: Utc::now(),
        }
    }
}
