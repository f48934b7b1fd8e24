#![deny(unsafe_code)]
//! Data-quality validation for mapped datasets.
//!
//! Rules are pure functions from (dataset, mapping) to a list of
//! [`dataprep_model::ValidationIssue`]s. Running validation twice on the
//! same inputs yields the same list; the [`Revalidator`] additionally skips
//! the pass entirely when nothing changed.

mod revalidate;
mod rules;

pub use revalidate::Revalidator;
pub use rules::validate;
