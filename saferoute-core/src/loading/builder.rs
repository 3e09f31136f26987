use log::info;

use super::{
    config::RoadNetworkConfig,
    parser::deserialize_csv_file,
    raw_types::{FeedEdge, FeedNode},
};
use crate::{Error, RoadGraph, RoadGraphBuilder};

/// Builds the road network from its node and edge CSV files
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed, or if the rows do
/// not form a valid network
pub fn load_road_graph(config: &RoadNetworkConfig) -> Result<RoadGraph, Error> {
    validate_config(config)?;

    info!("Loading road nodes: {}", config.nodes_path.display());
    let nodes: Vec<FeedNode> = deserialize_csv_file(&config.nodes_path)?;
    info!("Loading road edges: {}", config.edges_path.display());
    let edges: Vec<FeedEdge> = deserialize_csv_file(&config.edges_path)?;

    let mut builder = RoadGraphBuilder::with_capacity(nodes.len(), edges.len() * 2);
    for node in &nodes {
        builder.add_node(node.id, node.lat, node.lon)?;
    }
    for edge in &edges {
        let two_way = edge
            .oneway
            .map_or(config.two_way_by_default, |oneway| !oneway);
        if two_way {
            builder.add_two_way_edge(edge.u, edge.v, edge.length)?;
        } else {
            builder.add_edge(edge.u, edge.v, edge.length)?;
        }
    }

    let graph = builder.build();
    info!(
        "Road network created with {} nodes and {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn validate_config(config: &RoadNetworkConfig) -> Result<(), Error> {
    for path in [&config.nodes_path, &config.edges_path] {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Road network file not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}
