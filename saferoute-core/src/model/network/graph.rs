//! Road network graph with a spatial index over its nodes

use geo::{Distance, Haversine, Point};
use hashbrown::HashMap;
use petgraph::{
    Directed, Graph,
    algo::has_path_connecting,
    graph::{EdgeIndex, EdgeReference, NodeIndex},
};
use rstar::{RTree, primitives::GeomWithData};

use super::components::{RoadEdge, RoadNode};
use crate::{Error, Meters, NodeId};

/// R-tree entry: `[longitude * lon_scale, latitude]` with the graph index of the node
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Candidates from the R-tree that are re-ranked by great-circle distance
const NEAREST_CANDIDATES: usize = 8;

/// Directed road multigraph. Two-way streets are stored as two edges.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    pub(crate) graph: Graph<RoadNode, RoadEdge, Directed>,
    pub(crate) rtree: RTree<IndexedPoint>,
    pub(crate) id_index: HashMap<NodeId, NodeIndex>,
    /// cos of the mean node latitude, shrinks longitudes to ground proportions
    lon_scale: f64,
}

impl RoadGraph {
    pub(crate) fn from_parts(
        graph: Graph<RoadNode, RoadEdge, Directed>,
        id_index: HashMap<NodeId, NodeIndex>,
    ) -> Self {
        let lon_scale = mean_latitude(&graph).to_radians().cos();
        let points = graph
            .node_indices()
            .map(|idx| IndexedPoint::new(scaled(&graph[idx].geometry, lon_scale), idx))
            .collect();

        Self {
            graph,
            rtree: RTree::bulk_load(points),
            id_index,
            lon_scale,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Graph index of the node with the given external ID
    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Graph index of the node with the given external ID
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the node is not in the graph
    pub fn resolve(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.node_index(id).ok_or(Error::NodeNotFound(id))
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&RoadNode> {
        self.graph.node_weight(idx)
    }

    pub fn edge(&self, idx: EdgeIndex) -> Option<&RoadEdge> {
        self.graph.edge_weight(idx)
    }

    /// Source and target of an edge
    pub fn edge_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// Outgoing edges of a node
    pub fn edges(&self, node: NodeIndex) -> petgraph::graph::Edges<'_, RoadEdge, Directed> {
        self.graph.edges(node)
    }

    /// All edges between an ordered pair of nodes
    pub fn edges_connecting(
        &self,
        from: NodeIndex,
        to: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'_, RoadEdge>> {
        self.graph.edges_connecting(from, to)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.graph.node_weights()
    }

    /// Nearest network node to a point and the great-circle distance to it in meters
    ///
    /// The R-tree works on latitude-scaled degrees, its closest candidates are
    /// then compared by haversine distance.
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<(NodeIndex, Meters)> {
        self.rtree
            .nearest_neighbor_iter(&scaled(point, self.lon_scale))
            .take(NEAREST_CANDIDATES)
            .filter_map(|candidate| {
                let node = self.graph.node_weight(candidate.data)?;
                Some((candidate.data, Haversine.distance(*point, node.geometry)))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Whether `to` can be reached from `from` following edge directions
    pub fn is_reachable(&self, from: NodeIndex, to: NodeIndex) -> bool {
        has_path_connecting(&self.graph, from, to, None)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_latitude(graph: &Graph<RoadNode, RoadEdge, Directed>) -> f64 {
    if graph.node_count() == 0 {
        return 0.0;
    }
    graph.node_weights().map(RoadNode::latitude).sum::<f64>() / graph.node_count() as f64
}

fn scaled(point: &Point<f64>, lon_scale: f64) -> [f64; 2] {
    [point.x() * lon_scale, point.y()]
}
