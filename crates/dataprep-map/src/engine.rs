//! Mapping inference engine.

use dataprep_model::{ColumnMapping, SchemaField, schema_fields};
use regex::Regex;
use tracing::{debug, warn};

use crate::utils::normalize_text;

/// Infers a [`ColumnMapping`] from raw dataset column names.
///
/// The engine compiles the schema catalog's patterns once and walks them in
/// catalog order for every column: the first unclaimed field whose pattern
/// set matches the normalized column name claims it. Both the catalog order
/// and the per-column first-match rule are deliberate, documented
/// tie-breakers; nothing depends on map iteration order.
pub struct MapperEngine {
    patterns: Vec<(&'static SchemaField, Vec<Regex>)>,
}

impl MapperEngine {
    pub fn new() -> Self {
        let mut patterns = Vec::with_capacity(schema_fields().len());
        for field in schema_fields() {
            let mut compiled = Vec::with_capacity(field.patterns.len());
            for pattern in field.patterns {
                match Regex::new(pattern) {
                    Ok(regex) => compiled.push(regex),
                    Err(error) => {
                        warn!(field = field.id, pattern, %error, "skipping invalid mapping pattern");
                    }
                }
            }
            patterns.push((field, compiled));
        }
        Self { patterns }
    }

    /// Runs inference over the dataset's column names.
    ///
    /// Absence is a valid terminal state: columns nothing matches stay
    /// unmapped and fields nothing matches stay unassigned.
    pub fn infer(&self, columns: &[String]) -> ColumnMapping {
        let mut mapping = ColumnMapping::new();
        for column in columns {
            let normalized = normalize_text(column);
            if normalized.is_empty() {
                continue;
            }
            for (field, regexes) in &self.patterns {
                if mapping.column_for(field.id).is_some() {
                    continue;
                }
                if regexes.iter().any(|regex| regex.is_match(&normalized)) {
                    // Cannot conflict: the column is unclaimed by construction.
                    let _ = mapping.set(field.id, Some(column));
                    debug!(field = field.id, column = column.as_str(), "inferred mapping");
                    break;
                }
            }
        }
        mapping
    }
}

impl Default for MapperEngine {
    fn default() -> Self {
        Self::new()
    }
}
