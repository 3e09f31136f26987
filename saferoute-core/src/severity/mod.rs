//! Reduction of point-level accident records into per-location severity tables

mod aggregate;
mod filter;

pub use aggregate::{build_severity_table, build_severity_table_by, snap_severity_table};
pub use filter::{coordinate_bounds, filter_records};
