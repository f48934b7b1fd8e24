#![deny(unsafe_code)]

//! CSV acquisition and export.
//!
//! The acquisition collaborator contract: produce a [`Dataset`] with distinct
//! column names where every row carries an explicit entry for every column.

mod csv_table;
mod error;

pub use csv_table::{read_csv_path, read_csv_reader, write_csv_path, write_csv_writer};
pub use error::{IngestError, Result};
