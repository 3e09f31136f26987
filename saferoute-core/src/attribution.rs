//! Attaches accident severity to road edges by their endpoints
//!
//! Every edge is first reset to a zero severity, then looks up its endpoints
//! in the node severity table. Re-running attribution with the same table
//! therefore yields the same edge attributes.

use log::{info, warn};
use serde::Deserialize;

use crate::{
    RoadGraph,
    model::{NodeSeverityTable, SeverityStats},
};

/// How an edge picks its severity when its endpoints carry table entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributionPolicy {
    /// The source node's entry wins, the target's is used only when the source has none.
    /// Biased toward whichever endpoint the edge starts from.
    #[default]
    SourceFirst,
    /// Mean score and summed accident count of both endpoints when both have entries
    EndpointMean,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributionSummary {
    pub edges_total: usize,
    /// Edges that received a table entry
    pub edges_attributed: usize,
}

/// Attributes edges with [`AttributionPolicy::SourceFirst`]
pub fn attribute_graph(graph: &mut RoadGraph, table: &NodeSeverityTable) -> AttributionSummary {
    attribute_graph_with(graph, table, AttributionPolicy::default())
}

pub fn attribute_graph_with(
    graph: &mut RoadGraph,
    table: &NodeSeverityTable,
    policy: AttributionPolicy,
) -> AttributionSummary {
    if graph.is_empty() {
        warn!("Road network is empty, skipping severity attribution");
        return AttributionSummary::default();
    }

    for edge in graph.graph.edge_weights_mut() {
        edge.reset_severity();
    }

    let mut summary = AttributionSummary {
        edges_total: graph.edge_count(),
        edges_attributed: 0,
    };

    for edge_idx in graph.graph.edge_indices() {
        let Some((u, v)) = graph.graph.edge_endpoints(edge_idx) else {
            continue;
        };
        let source = table.get(&graph.graph[u].id);
        let target = table.get(&graph.graph[v].id);

        if let Some(stats) = resolve(policy, source, target) {
            let edge = &mut graph.graph[edge_idx];
            edge.severity_score = stats.mean_severity_score;
            edge.accident_count = stats.accident_count;
            summary.edges_attributed += 1;
        }
    }

    info!(
        "Attributed severity to {} of {} edges from {} locations",
        summary.edges_attributed,
        summary.edges_total,
        table.len()
    );
    summary
}

fn resolve(
    policy: AttributionPolicy,
    source: Option<&SeverityStats>,
    target: Option<&SeverityStats>,
) -> Option<SeverityStats> {
    match (policy, source, target) {
        (AttributionPolicy::EndpointMean, Some(a), Some(b)) => Some(SeverityStats {
            mean_severity_score: (a.mean_severity_score + b.mean_severity_score) / 2.0,
            accident_count: a.accident_count + b.accident_count,
        }),
        (_, Some(stats), _) | (_, None, Some(stats)) => Some(*stats),
        (_, None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{Error, RoadGraphBuilder, model::SeverityTable};

    fn stats(score: f64, count: u32) -> SeverityStats {
        SeverityStats {
            mean_severity_score: score,
            accident_count: count,
        }
    }

    fn triangle() -> Result<RoadGraph, Error> {
        let mut builder = RoadGraphBuilder::new();
        builder.add_node(1, 51.500, -0.100)?;
        builder.add_node(2, 51.501, -0.100)?;
        builder.add_node(3, 51.502, -0.100)?;
        builder.add_edge(1, 2, 100.0)?;
        builder.add_edge(2, 3, 100.0)?;
        builder.add_edge(3, 1, 200.0)?;
        Ok(builder.build())
    }

    fn edge_attributes(graph: &RoadGraph) -> Vec<(f64, u32)> {
        graph
            .graph
            .edge_weights()
            .map(|e| (e.severity_score, e.accident_count))
            .collect()
    }

    #[test]
    fn source_endpoint_takes_priority() -> Result<(), Error> {
        let mut graph = triangle()?;
        let table: SeverityTable<i64> = [(1, stats(2.0, 4)), (2, stats(3.0, 1))]
            .into_iter()
            .collect();

        let summary = attribute_graph(&mut graph, &table);

        // 1->2 takes node 1, 2->3 takes node 2, 3->1 falls back to node 1
        assert_eq!(
            edge_attributes(&graph),
            vec![(2.0, 4), (3.0, 1), (2.0, 4)]
        );
        assert_eq!(summary.edges_attributed, 3);
        Ok(())
    }

    #[test]
    fn edges_without_data_default_to_zero() -> Result<(), Error> {
        let mut graph = triangle()?;
        let table: SeverityTable<i64> = [(3, stats(1.5, 2))].into_iter().collect();

        let summary = attribute_graph(&mut graph, &table);

        assert_eq!(
            edge_attributes(&graph),
            vec![(0.0, 0), (1.5, 2), (1.5, 2)]
        );
        assert_eq!(summary.edges_attributed, 2);
        assert_eq!(summary.edges_total, 3);
        Ok(())
    }

    #[test]
    fn reattribution_overwrites() -> Result<(), Error> {
        let mut graph = triangle()?;
        let table: SeverityTable<i64> = [(2, stats(2.5, 3))].into_iter().collect();

        attribute_graph(&mut graph, &table);
        let once = edge_attributes(&graph);
        attribute_graph(&mut graph, &table);
        assert_eq!(edge_attributes(&graph), once);

        attribute_graph(&mut graph, &SeverityTable::default());
        assert!(edge_attributes(&graph).iter().all(|&(s, c)| s == 0.0 && c == 0));
        Ok(())
    }

    #[test]
    fn endpoint_mean_blends_both_ends() -> Result<(), Error> {
        let mut graph = triangle()?;
        let table: SeverityTable<i64> = [(1, stats(1.0, 1)), (2, stats(2.0, 3))]
            .into_iter()
            .collect();

        attribute_graph_with(&mut graph, &table, AttributionPolicy::EndpointMean);

        let attributes = edge_attributes(&graph);
        assert_relative_eq!(attributes[0].0, 1.5);
        assert_eq!(attributes[0].1, 4);
        assert_eq!(attributes[1], (2.0, 3));
        assert_eq!(attributes[2], (1.0, 1));
        Ok(())
    }

    #[test_log::test]
    fn empty_graph_is_left_alone() {
        let mut graph = RoadGraphBuilder::new().build();
        let table: SeverityTable<i64> = [(1, stats(1.0, 1))].into_iter().collect();

        let summary = attribute_graph(&mut graph, &table);
        assert_eq!(summary, AttributionSummary::default());
    }
}
