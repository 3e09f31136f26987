use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid accident record #{index}: {reason}")]
    Validation { index: usize, reason: String },
    #[error("Node {0} is not part of the road network")]
    NodeNotFound(NodeId),
    #[error("No path exists between nodes {from} and {to}")]
    Unreachable { from: NodeId, to: NodeId },
    #[error("Path has no edges, metrics are undefined")]
    EmptyPath,
    #[error("No nearby points found for snapping")]
    NoPointsFound,
    #[error("Invalid edge index")]
    InvalidEdgeIndex,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
