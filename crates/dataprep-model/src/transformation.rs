//! Recorded, replayable structural edits.
//!
//! A [`Transformation`] is immutable once recorded: the engine replays the
//! recorded value (including its scope and, for filtered scopes, the exact
//! selected row indices) against the original dataset to reconstruct state
//! for undo/redo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::FilterCondition;

/// Which token a split extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPosition {
    First,
    Second,
    Last,
}

/// Whether an operation applies to every row or an explicit subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    All,
    /// Selected row indices, recorded at apply time.
    Filtered(Vec<usize>),
}

impl Scope {
    pub fn contains(&self, row: usize) -> bool {
        match self {
            Self::All => true,
            Self::Filtered(selected) => selected.contains(&row),
        }
    }

    pub fn is_empty_selection(&self) -> bool {
        matches!(self, Self::Filtered(selected) if selected.is_empty())
    }
}

/// The structural edit itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformationKind {
    Split {
        column: String,
        delimiter: String,
        position: SplitPosition,
        new_column: String,
        keep_original: bool,
    },
    Merge {
        column_a: String,
        column_b: String,
        separator: String,
        target_column: String,
        keep_originals: bool,
    },
    ConditionalUpdate {
        target_column: String,
        new_value: String,
        /// Recorded for provenance even under filtered scope, where the
        /// explicit selection is what gets applied.
        filter_chain: Vec<FilterCondition>,
    },
}

impl TransformationKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Split { .. } => "Split",
            Self::Merge { .. } => "Merge",
            Self::ConditionalUpdate { .. } => "Conditional Update",
        }
    }

    /// Columns this edit reads or writes, for review aggregation.
    pub fn touched_columns(&self) -> Vec<&str> {
        match self {
            Self::Split {
                column, new_column, ..
            } => vec![column, new_column],
            Self::Merge {
                column_a,
                column_b,
                target_column,
                ..
            } => vec![column_a, column_b, target_column],
            Self::ConditionalUpdate { target_column, .. } => vec![target_column],
        }
    }

    fn describe(&self, scope: &Scope) -> String {
        let suffix = match scope {
            Scope::All => String::new(),
            Scope::Filtered(selected) => format!(" ({} selected rows)", selected.len()),
        };
        match self {
            Self::Split {
                column,
                delimiter,
                position,
                new_column,
                keep_original,
            } => {
                let position = match position {
                    SplitPosition::First => "first",
                    SplitPosition::Second => "second",
                    SplitPosition::Last => "last",
                };
                let kept = if *keep_original { "" } else { ", dropping the extracted token" };
                format!(
                    "Split \"{column}\" on \"{delimiter}\" taking the {position} token into \"{new_column}\"{kept}{suffix}"
                )
            }
            Self::Merge {
                column_a,
                column_b,
                separator,
                target_column,
                keep_originals,
            } => {
                let kept = if *keep_originals { "" } else { ", removing the source columns" };
                format!(
                    "Merge \"{column_a}\" and \"{column_b}\" with \"{separator}\" into \"{target_column}\"{kept}{suffix}"
                )
            }
            Self::ConditionalUpdate {
                target_column,
                new_value,
                filter_chain,
            } => format!(
                "Set \"{target_column}\" to \"{new_value}\" where {} condition(s) match{suffix}",
                filter_chain.len()
            ),
        }
    }
}

/// A recorded transformation: the edit, its scope, and provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub kind: TransformationKind,
    pub scope: Scope,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Transformation {
    pub fn new(kind: TransformationKind, scope: Scope) -> Self {
        let description = kind.describe(&scope);
        Self {
            kind,
            scope,
            description,
            timestamp: Utc::now(),
        }
    }
}
