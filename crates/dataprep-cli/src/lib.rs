#![deny(unsafe_code)]
//! CLI library components for the dataprep importer.

pub mod logging;
pub mod pipeline;
