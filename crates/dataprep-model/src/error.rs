//! Error types for model contract violations.

/// Contract violations over model types.
///
/// Engine-level input-state problems (missing column, empty selection) are
/// deliberately not errors: the engines treat those as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("unknown schema field: {0}")]
    UnknownField(String),
    #[error("column '{column}' is already mapped to '{field}'")]
    ColumnAlreadyMapped { column: String, field: String },
}
