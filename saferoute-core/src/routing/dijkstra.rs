use std::{cmp::Ordering, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use log::{debug, trace};
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use super::CostModel;
use crate::{RoadGraph, model::Path};

#[derive(Copy, Clone)]
struct State {
    cost: f64,
    node: NodeIndex,
}

// Min-heap by cost, ties broken by node index so pops are deterministic
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Dijkstra's algorithm between two nodes under the given cost model
///
/// Returns the total cost and the path, including the specific parallel
/// edge taken at every step, or `None` when `target` cannot be reached.
/// Edges with a negative or NaN cost are treated as impassable.
pub fn shortest_path<C>(
    graph: &RoadGraph,
    start: NodeIndex,
    target: NodeIndex,
    cost_model: &C,
) -> Option<(f64, Path)>
where
    C: CostModel + ?Sized,
{
    graph.node(start)?;
    graph.node(target)?;

    if start == target {
        return Some((0.0, Path::single(start)));
    }

    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> =
        HashMap::with_capacity(estimated_nodes);
    let mut settled = FixedBitSet::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry
        if settled.put(node.index()) {
            continue;
        }

        if node == target {
            break;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            if settled.contains(next.index()) {
                continue;
            }

            let edge_cost = cost_model.cost(edge.weight());
            if edge_cost.is_nan() || edge_cost < 0.0 {
                trace!("Skipping edge {:?} with cost {edge_cost}", edge.id());
                continue;
            }
            let next_cost = cost + edge_cost;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, (node, edge.id()));
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, (node, edge.id()));
                    }
                }
            }
        }
    }

    debug!(
        "Dijkstra settled {} of {} nodes",
        settled.count_ones(..),
        graph.node_count()
    );

    if !settled.contains(target.index()) {
        return None;
    }

    let total_cost = *distances.get(&target)?;

    // Follow predecessors backward from target to start
    let mut nodes = vec![target];
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        let &(prev, via) = predecessors.get(&current)?;
        nodes.push(prev);
        edges.push(via);
        current = prev;
    }
    nodes.reverse();
    edges.reverse();

    Some((total_cost, Path::from_parts(nodes, edges)))
}
