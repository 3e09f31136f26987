//! Data model for severity-aware road routing
//!
//! Contains the road network multigraph, accident records with their
//! aggregated severity tables, and the path produced by the router.

pub mod accident;
pub mod network;
pub mod path;

pub use accident::{
    AccidentRecord, BoundingBox, CoordinateKey, NodeSeverityTable, RawAccidentRecord,
    SeverityStats, SeverityTable,
};
pub use network::{IndexedPoint, RoadEdge, RoadGraph, RoadGraphBuilder, RoadNode};
pub use path::Path;
