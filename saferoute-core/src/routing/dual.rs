use geo::Point;
use log::{debug, info};
use petgraph::graph::NodeIndex;

use super::{Distance, Safety, shortest_path};
use crate::{Error, NodeId, RoadGraph, model::Path};

/// Shortest and safest routes between the same pair of nodes
#[derive(Debug, Clone)]
pub struct DualRoute {
    /// Minimum total length
    pub shortest: Path,
    /// Minimum total `severity_score + 1`
    pub safest: Path,
    /// Length of `shortest` in meters
    pub shortest_cost: f64,
    /// Safety cost of `safest`
    pub safest_cost: f64,
}

/// Computes the shortest and the safest route between two network nodes
///
/// The two searches are independent runs over the read-only graph.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if either node is absent, [`Error::Unreachable`]
/// if `destination` cannot be reached from `source`
pub fn route(graph: &RoadGraph, source: NodeId, destination: NodeId) -> Result<DualRoute, Error> {
    let start = graph.resolve(source)?;
    let target = graph.resolve(destination)?;
    route_indices(graph, start, target)
}

/// Snaps both points to their nearest network nodes, then runs [`route`]
///
/// # Errors
///
/// [`Error::NoPointsFound`] on an empty network, otherwise as [`route`]
pub fn route_points(graph: &RoadGraph, from: Point<f64>, to: Point<f64>) -> Result<DualRoute, Error> {
    let (start, start_offset) = graph.nearest_node(&from).ok_or(Error::NoPointsFound)?;
    let (target, target_offset) = graph.nearest_node(&to).ok_or(Error::NoPointsFound)?;
    debug!(
        "Snapped endpoints to the network ({start_offset:.1} m and {target_offset:.1} m away)"
    );
    route_indices(graph, start, target)
}

fn route_indices(graph: &RoadGraph, start: NodeIndex, target: NodeIndex) -> Result<DualRoute, Error> {
    let unreachable = || Error::Unreachable {
        from: graph.node(start).map_or(NodeId::default(), |n| n.id),
        to: graph.node(target).map_or(NodeId::default(), |n| n.id),
    };

    let (shortest_cost, shortest) =
        shortest_path(graph, start, target, &Distance).ok_or_else(unreachable)?;
    let (safest_cost, safest) =
        shortest_path(graph, start, target, &Safety).ok_or_else(unreachable)?;

    info!(
        "Found routes with {} (shortest) and {} (safest) edges",
        shortest.len(),
        safest.len()
    );

    Ok(DualRoute {
        shortest,
        safest,
        shortest_cost,
        safest_cost,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::RoadGraphBuilder;

    #[test]
    fn same_endpoint_gives_single_node_paths() -> Result<(), Error> {
        let mut builder = RoadGraphBuilder::new();
        builder.add_node(7, 51.5, -0.1)?;
        let graph = builder.build();

        let routes = route(&graph, 7, 7)?;
        assert_eq!(routes.shortest, routes.safest);
        assert_eq!(routes.shortest.node_ids(&graph), vec![7]);
        assert_relative_eq!(routes.shortest_cost, 0.0);
        assert_relative_eq!(routes.safest_cost, 0.0);
        Ok(())
    }

    #[test]
    fn unknown_node_is_not_found() -> Result<(), Error> {
        let mut builder = RoadGraphBuilder::new();
        builder.add_node(1, 51.5, -0.1)?;
        let graph = builder.build();

        assert!(matches!(route(&graph, 1, 2), Err(Error::NodeNotFound(2))));
        assert!(matches!(route(&graph, 3, 1), Err(Error::NodeNotFound(3))));
        Ok(())
    }

    #[test]
    fn points_on_empty_graph_fail() {
        let graph = RoadGraphBuilder::new().build();
        assert!(matches!(
            route_points(&graph, Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            Err(Error::NoPointsFound)
        ));
    }
}
