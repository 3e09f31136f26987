use geo::Point;
use hashbrown::HashMap;
use petgraph::{
    Directed, Graph,
    graph::{EdgeIndex, NodeIndex},
};

use super::{
    components::{RoadEdge, RoadNode},
    graph::RoadGraph,
};
use crate::{Error, Meters, NodeId};

/// Incremental construction of a [`RoadGraph`]
///
/// Nodes must be added before the edges that reference them. The spatial
/// index is bulk-loaded once in [`RoadGraphBuilder::build`].
#[derive(Debug, Default)]
pub struct RoadGraphBuilder {
    graph: Graph<RoadNode, RoadEdge, Directed>,
    id_index: HashMap<NodeId, NodeIndex>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: Graph::with_capacity(nodes, edges),
            id_index: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a node at the given coordinate
    ///
    /// # Errors
    ///
    /// Fails if the ID is already present or the coordinate is not a valid WGS84 position
    pub fn add_node(&mut self, id: NodeId, lat: f64, lon: f64) -> Result<NodeIndex, Error> {
        if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
            return Err(Error::InvalidData(format!(
                "Node {id} has invalid latitude {lat}"
            )));
        }
        if !(lon.is_finite() && (-180.0..=180.0).contains(&lon)) {
            return Err(Error::InvalidData(format!(
                "Node {id} has invalid longitude {lon}"
            )));
        }
        if self.id_index.contains_key(&id) {
            return Err(Error::InvalidData(format!("Duplicate node ID {id}")));
        }

        let idx = self.graph.add_node(RoadNode {
            id,
            geometry: Point::new(lon, lat),
        });
        self.id_index.insert(id, idx);
        Ok(idx)
    }

    /// Adds a directed edge `from -> to`
    ///
    /// The edge gets the next free parallel key for this node pair.
    ///
    /// # Errors
    ///
    /// Fails if either node is unknown or the length is not a positive finite number
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length: Meters) -> Result<EdgeIndex, Error> {
        if !(length.is_finite() && length > 0.0) {
            return Err(Error::InvalidData(format!(
                "Edge {from} -> {to} has invalid length {length}"
            )));
        }
        let u = *self.id_index.get(&from).ok_or(Error::NodeNotFound(from))?;
        let v = *self.id_index.get(&to).ok_or(Error::NodeNotFound(to))?;

        let key = u32::try_from(self.graph.edges_connecting(u, v).count())
            .map_err(|_| Error::InvalidData(format!("Too many edges between {from} and {to}")))?;

        Ok(self.graph.add_edge(u, v, RoadEdge::new(key, length)))
    }

    /// Adds a street traversable in both directions as two directed edges
    ///
    /// # Errors
    ///
    /// Same as [`RoadGraphBuilder::add_edge`]
    pub fn add_two_way_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        length: Meters,
    ) -> Result<(EdgeIndex, EdgeIndex), Error> {
        let forward = self.add_edge(a, b, length)?;
        let backward = self.add_edge(b, a, length)?;
        Ok((forward, backward))
    }

    pub fn build(self) -> RoadGraph {
        RoadGraph::from_parts(self.graph, self.id_index)
    }
}
