//! Mapping state for the operator-driven review workflow.

use dataprep_model::{ColumnMapping, ModelError, schema_fields};
use serde::Serialize;
use tracing::debug;

use crate::engine::MapperEngine;

/// The mapping plus the dataset columns it was built against.
///
/// Owned by the operator between auto-detection and pipeline finalization:
/// inference seeds it, manual overrides mutate it, and the completeness
/// queries drive the review screens.
#[derive(Debug, Clone)]
pub struct MappingState {
    mapping: ColumnMapping,
    columns: Vec<String>,
}

impl MappingState {
    /// Seeds state by running inference over the dataset columns.
    pub fn infer(columns: &[String]) -> Self {
        let mapping = MapperEngine::new().infer(columns);
        Self {
            mapping,
            columns: columns.to_vec(),
        }
    }

    /// Wraps an existing mapping (e.g. loaded from a preset).
    pub fn from_mapping(mapping: ColumnMapping, columns: &[String]) -> Self {
        Self {
            mapping,
            columns: columns.to_vec(),
        }
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn into_mapping(self) -> ColumnMapping {
        self.mapping
    }

    /// Manual override; `None` unsets the field.
    pub fn set(&mut self, field_id: &str, column: Option<&str>) -> Result<(), ModelError> {
        self.mapping.set(field_id, column)?;
        debug!(field = field_id, column, "mapping updated");
        Ok(())
    }

    /// Required fields with no mapped column.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.mapping.missing_required()
    }

    /// Dataset columns not claimed by any field.
    pub fn unmapped_columns(&self) -> Vec<&str> {
        self.mapping.unmapped_columns(&self.columns)
    }

    /// Completeness counts for the review screens.
    pub fn summary(&self) -> MappingSummary {
        let required_total = schema_fields().iter().filter(|field| field.required).count();
        let required_mapped = schema_fields()
            .iter()
            .filter(|field| field.required && self.mapping.column_for(field.id).is_some())
            .count();
        MappingSummary {
            total_fields: schema_fields().len(),
            mapped: self.mapping.mapped_count(),
            required_total,
            required_mapped,
            unmapped_columns: self.unmapped_columns().len(),
        }
    }
}

/// Counts for operator sign-off.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MappingSummary {
    pub total_fields: usize,
    pub mapped: usize,
    pub required_total: usize,
    pub required_mapped: usize,
    pub unmapped_columns: usize,
}
