#![deny(unsafe_code)]

//! Column mapping: inference plus operator-driven override state.

mod engine;
mod state;
mod utils;

pub use engine::MapperEngine;
pub use state::{MappingState, MappingSummary};
pub use utils::normalize_text;
