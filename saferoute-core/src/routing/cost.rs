use crate::model::RoadEdge;

/// Non-negative cost of traversing an edge
pub trait CostModel {
    fn cost(&self, edge: &RoadEdge) -> f64;
}

impl<F> CostModel for F
where
    F: Fn(&RoadEdge) -> f64,
{
    fn cost(&self, edge: &RoadEdge) -> f64 {
        self(edge)
    }
}

/// Edge length in meters
#[derive(Debug, Clone, Copy, Default)]
pub struct Distance;

impl CostModel for Distance {
    fn cost(&self, edge: &RoadEdge) -> f64 {
        edge.length
    }
}

/// Accident severity plus one, so every extra hop costs something even on
/// accident-free streets
#[derive(Debug, Clone, Copy, Default)]
pub struct Safety;

impl CostModel for Safety {
    fn cost(&self, edge: &RoadEdge) -> f64 {
        edge.severity_score + 1.0
    }
}
