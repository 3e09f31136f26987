use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::{NodeId, RoadGraph};

/// Ordered, edge-connected sequence of nodes
///
/// `edges[i]` is the exact parallel edge taken from `nodes[i]` to `nodes[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeIndex>,
    edges: Vec<EdgeIndex>,
}

impl Path {
    /// Path that never leaves `node`
    pub fn single(node: NodeIndex) -> Self {
        Self {
            nodes: vec![node],
            edges: Vec::new(),
        }
    }

    pub(crate) fn from_parts(nodes: Vec<NodeIndex>, edges: Vec<EdgeIndex>) -> Self {
        debug_assert_eq!(nodes.len(), edges.len() + 1);
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Number of traversed edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for a single-node path
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// First node. Paths built by the router always hold at least one node.
    pub fn source(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    /// External IDs of the visited nodes
    pub fn node_ids(&self, graph: &RoadGraph) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter_map(|&idx| graph.node(idx).map(|node| node.id))
            .collect()
    }

    /// Checks that every stored edge joins its two consecutive nodes in `graph`
    pub fn is_consistent_with(&self, graph: &RoadGraph) -> bool {
        self.nodes.len() == self.edges.len() + 1
            && self
                .nodes
                .iter()
                .tuple_windows()
                .zip(&self.edges)
                .all(|((&u, &v), &edge)| graph.edge_endpoints(edge) == Some((u, v)))
    }
}
