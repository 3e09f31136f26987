//! Shortest path search over the road network under interchangeable edge costs

mod cost;
pub mod dijkstra;
mod dual;

pub use cost::{CostModel, Distance, Safety};
pub use dijkstra::shortest_path;
pub use dual::{DualRoute, route, route_points};
