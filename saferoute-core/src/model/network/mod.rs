//! Road network model

pub mod builder;
pub mod components;
pub mod graph;

pub use builder::RoadGraphBuilder;
pub use components::{RoadEdge, RoadNode};
pub use graph::{IndexedPoint, RoadGraph};
