//! Adapters between the optimizer and the outside world: JSON input files
//! and the plain-text totals report.

pub mod csv;
pub mod json;
