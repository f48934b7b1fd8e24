#![deny(unsafe_code)]
//! The pre-import review: one aggregate over everything the pipeline did.

mod review;

pub use review::{ReviewSummary, summarize};
