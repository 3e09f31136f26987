//! Dual-objective routing over a road network: the geometrically shortest
//! route and the route with the least historical accident severity exposure.
//!
//! The pipeline is
//! accident records → [`severity`] table → [`attribution`] onto the road graph
//! → [`routing`] twice (distance, safety) → [`metrics`] per path.

pub mod attribution;
pub mod error;
pub mod loading;
pub mod metrics;
pub mod model;
pub mod output;
pub mod prelude;
pub mod routing;
pub mod severity;

pub use error::Error;

pub use attribution::{AttributionPolicy, AttributionSummary, attribute_graph, attribute_graph_with};
pub use metrics::{PathMetrics, path_metrics};
pub use model::{
    AccidentRecord, CoordinateKey, NodeSeverityTable, Path, RoadEdge, RoadGraph, RoadGraphBuilder,
    RoadNode, SeverityStats, SeverityTable,
};
pub use routing::{CostModel, Distance, DualRoute, Safety, route, route_points, shortest_path};
pub use severity::{build_severity_table, build_severity_table_by, snap_severity_table};

/// External identifier of a road network node
pub type NodeId = i64;
/// Edge length in meters
pub type Meters = f64;
