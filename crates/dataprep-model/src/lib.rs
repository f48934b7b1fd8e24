#![deny(unsafe_code)]

pub mod cleanup;
pub mod error;
pub mod filter;
pub mod issue;
pub mod mapping;
pub mod preset;
pub mod schema;
pub mod table;
pub mod transformation;

pub use cleanup::{CleanupAction, CleanupKind, StandardTable};
pub use error::ModelError;
pub use filter::{FilterCondition, FilterOperator, LogicOperator};
pub use issue::ValidationIssue;
pub use mapping::ColumnMapping;
pub use preset::Preset;
pub use schema::{CANONICAL_STATUSES, Importance, SchemaField, schema_field, schema_fields};
pub use table::{CellValue, Dataset, Row};
pub use transformation::{Scope, SplitPosition, Transformation, TransformationKind};
