//! Aggregate distance and severity figures of a routed path

use serde::Serialize;

use crate::{Error, RoadGraph, model::Path};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathMetrics {
    /// Sum of traversed edge lengths in meters
    pub total_distance: f64,
    /// Mean edge severity, rounded half to even
    pub mean_severity: u32,
    /// Sum of accident counts over traversed edges
    pub accident_count: u32,
    pub edge_count: usize,
}

/// Reduces a path to its total distance and mean severity
///
/// Only the edges recorded in the path are visited, so a path through
/// parallel edges is measured along the edges the router actually chose.
///
/// # Errors
///
/// [`Error::EmptyPath`] for a single-node path, [`Error::InvalidEdgeIndex`]
/// if the path does not belong to `graph`
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn path_metrics(graph: &RoadGraph, path: &Path) -> Result<PathMetrics, Error> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }

    let mut total_distance = 0.0;
    let mut severity_sum = 0.0;
    let mut accident_count: u32 = 0;
    for &edge_idx in path.edges() {
        let edge = graph.edge(edge_idx).ok_or(Error::InvalidEdgeIndex)?;
        total_distance += edge.length;
        severity_sum += edge.severity_score;
        accident_count = accident_count.saturating_add(edge.accident_count);
    }

    let edge_count = path.len();
    let mean = severity_sum / edge_count as f64;

    Ok(PathMetrics {
        total_distance,
        mean_severity: mean.round_ties_even() as u32,
        accident_count,
        edge_count,
    })
}
