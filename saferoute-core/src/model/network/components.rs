//! Road network components - nodes and edges

use geo::Point;

use crate::{Meters, NodeId};

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// External ID of the node
    pub id: NodeId,
    /// Node coordinates, x = longitude, y = latitude
    pub geometry: Point<f64>,
}

impl RoadNode {
    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Road graph edge (street segment)
///
/// Several edges may connect the same ordered pair of nodes, they are told
/// apart by `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    /// Parallel edge key, unique per ordered node pair
    pub key: u32,
    /// Segment length in meters
    pub length: Meters,
    /// Mean historical accident severity near this segment
    pub severity_score: f64,
    /// Number of historical accidents near this segment
    pub accident_count: u32,
}

impl RoadEdge {
    pub fn new(key: u32, length: Meters) -> Self {
        Self {
            key,
            length,
            severity_score: 0.0,
            accident_count: 0,
        }
    }

    pub(crate) fn reset_severity(&mut self) {
        self.severity_score = 0.0;
        self.accident_count = 0;
    }
}
