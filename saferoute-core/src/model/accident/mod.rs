//! Historical accident records and the severity tables aggregated from them

pub mod record;
pub mod table;

pub use record::{AccidentRecord, BoundingBox, RawAccidentRecord};
pub use table::{CoordinateKey, NodeSeverityTable, SeverityStats, SeverityTable};
