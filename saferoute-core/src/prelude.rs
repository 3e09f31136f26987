// Re-export key components
pub use crate::attribution::{AttributionPolicy, AttributionSummary, attribute_graph, attribute_graph_with};
pub use crate::loading::{
    AccidentDataConfig, RoadNetworkConfig, load_accident_records, load_road_graph,
    write_severity_table,
};
pub use crate::metrics::{PathMetrics, path_metrics};
pub use crate::model::{
    AccidentRecord, BoundingBox, CoordinateKey, NodeSeverityTable, Path, RoadGraph,
    RoadGraphBuilder, SeverityStats, SeverityTable,
};
pub use crate::output::routes_to_geojson_string;
pub use crate::routing::{CostModel, Distance, DualRoute, Safety, route, route_points};
pub use crate::severity::{
    build_severity_table, coordinate_bounds, filter_records, snap_severity_table,
};

// Core types for the road network
pub use crate::Error;
pub use crate::Meters;
pub use crate::NodeId;
