#![deny(unsafe_code)]

//! The transformation engine: structural edits (split, merge, conditional
//! update) over a [`dataprep_model::Dataset`], scoped to all rows or an
//! explicit selection, with a linear branch-truncating history that
//! reconstructs state by replaying the recorded log against the original.

mod engine;
mod history;
mod predicate;
mod session;

pub use engine::{ApplyOutcome, apply};
pub use history::{TransformationHistory, replay};
pub use predicate::evaluate;
pub use session::TransformSession;
