//! Assignment of canonical schema fields to raw dataset columns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::schema::{schema_field, schema_fields};

/// Mapping from schema field id to a concrete dataset column name.
///
/// Invariants: only catalog field ids are accepted, and a column name may be
/// the target of at most one field. An unmapped dataset column is legal and
/// surfaced separately via [`ColumnMapping::unmapped_columns`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    assignments: BTreeMap<String, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The column mapped to a field, if any.
    pub fn column_for(&self, field_id: &str) -> Option<&str> {
        self.assignments.get(field_id).map(String::as_str)
    }

    /// The field a column is mapped to, if any.
    pub fn field_for(&self, column: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(_, mapped)| mapped.as_str() == column)
            .map(|(field, _)| field.as_str())
    }

    /// Sets or clears the column for a field.
    ///
    /// Clearing (`column = None`) is always valid. Setting fails when the
    /// field is not in the catalog or the column is already claimed by a
    /// different field.
    pub fn set(&mut self, field_id: &str, column: Option<&str>) -> Result<(), ModelError> {
        if schema_field(field_id).is_none() {
            return Err(ModelError::UnknownField(field_id.to_string()));
        }
        let Some(column) = column else {
            self.assignments.remove(field_id);
            return Ok(());
        };
        if let Some(owner) = self.field_for(column)
            && owner != field_id
        {
            return Err(ModelError::ColumnAlreadyMapped {
                column: column.to_string(),
                field: owner.to_string(),
            });
        }
        self.assignments
            .insert(field_id.to_string(), column.to_string());
        Ok(())
    }

    pub fn mapped_count(&self) -> usize {
        self.assignments.len()
    }

    /// Field ids with `required = true` and no mapped column.
    pub fn missing_required(&self) -> Vec<&'static str> {
        schema_fields()
            .iter()
            .filter(|field| field.required && !self.assignments.contains_key(field.id))
            .map(|field| field.id)
            .collect()
    }

    /// Dataset columns not claimed by any field, in dataset order.
    pub fn unmapped_columns<'a>(&self, columns: &'a [String]) -> Vec<&'a str> {
        columns
            .iter()
            .filter(|column| self.field_for(column).is_none())
            .map(String::as_str)
            .collect()
    }

    /// (field id, column) pairs in field-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(field, column)| (field.as_str(), column.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear() {
        let mut mapping = ColumnMapping::new();
        mapping.set("price", Some("Price (EGP)")).unwrap();
        assert_eq!(mapping.column_for("price"), Some("Price (EGP)"));

        mapping.set("price", None).unwrap();
        assert_eq!(mapping.column_for("price"), None);
    }

    #[test]
    fn rejects_unknown_field() {
        let mut mapping = ColumnMapping::new();
        let err = mapping.set("bogus", Some("X")).unwrap_err();
        assert!(matches!(err, ModelError::UnknownField(_)));
    }

    #[test]
    fn rejects_double_mapping() {
        let mut mapping = ColumnMapping::new();
        mapping.set("price", Some("Amount")).unwrap();
        let err = mapping.set("area", Some("Amount")).unwrap_err();
        assert!(matches!(err, ModelError::ColumnAlreadyMapped { .. }));

        // Re-setting the same field to the same column is not a conflict.
        mapping.set("price", Some("Amount")).unwrap();
    }

    #[test]
    fn no_two_fields_share_a_column_after_any_set() {
        let mut mapping = ColumnMapping::new();
        mapping.set("unit_code", Some("Unit")).unwrap();
        mapping.set("price", Some("Price")).unwrap();
        mapping.set("status", Some("State")).unwrap();

        let mut columns: Vec<&str> = mapping.iter().map(|(_, column)| column).collect();
        columns.sort_unstable();
        let before = columns.len();
        columns.dedup();
        assert_eq!(columns.len(), before);
    }

    #[test]
    fn missing_required_reports_unmapped_mandatory_fields() {
        let mut mapping = ColumnMapping::new();
        assert_eq!(mapping.missing_required(), vec!["unit_code", "price"]);

        mapping.set("unit_code", Some("Unit")).unwrap();
        assert_eq!(mapping.missing_required(), vec!["price"]);
    }

    #[test]
    fn unmapped_columns_preserve_dataset_order() {
        let mut mapping = ColumnMapping::new();
        mapping.set("price", Some("B")).unwrap();
        let columns = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(mapping.unmapped_columns(&columns), vec!["A", "C"]);
    }
}
