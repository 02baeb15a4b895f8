//! Comparison result types

mod result;

pub use result::{ComparisonResult, ComparisonSummary, InputSummary};
