use std::path::Path;

use anyhow::{Context, bail};
use geo::Point;
use saferoute_core::output::routes_to_geojson_string;
use saferoute_core::prelude::*;
use tracing::info;

use crate::config::AppConfig;

/// Result of a routing request, ready for printing
#[derive(Debug, Clone)]
pub struct RouteReport {
    pub routes: DualRoute,
    /// `None` when start and destination snap to the same node
    pub metrics: Option<(PathMetrics, PathMetrics)>,
}

impl RouteReport {
    pub fn lines(&self) -> Vec<String> {
        match &self.metrics {
            Some((shortest, safest)) => vec![
                format_metrics("Shortest Path", shortest),
                format_metrics("Safest Path", safest),
            ],
            None => vec!["Start and destination are the same network node".to_string()],
        }
    }
}

fn format_metrics(label: &str, metrics: &PathMetrics) -> String {
    format!(
        "{label}: Distance = {:.2}m | Mean Severity Score = {}",
        metrics.total_distance, metrics.mean_severity
    )
}

/// Loads everything named in `config`, attributes the network and routes between two points
pub fn run_route(config: &AppConfig, from: Point<f64>, to: Point<f64>) -> anyhow::Result<(RoadGraph, RouteReport)> {
    let mut graph = load_road_graph(&config.network).context("Failed to load road network")?;
    let records =
        load_accident_records(&config.accidents).context("Failed to load accident records")?;

    let table = snap_severity_table(&graph, &records)?;
    attribute_graph_with(&mut graph, &table, config.routing.attribution_policy);

    let routes = match route_points(&graph, from, to) {
        Ok(routes) => routes,
        Err(Error::Unreachable { from, to }) => {
            bail!("No path exists between the selected start ({from}) and end ({to}) points")
        }
        Err(e) => return Err(e.into()),
    };

    let metrics = match (
        path_metrics(&graph, &routes.shortest),
        path_metrics(&graph, &routes.safest),
    ) {
        (Ok(shortest), Ok(safest)) => Some((shortest, safest)),
        (Err(Error::EmptyPath), _) | (_, Err(Error::EmptyPath)) => None,
        (Err(e), _) | (_, Err(e)) => return Err(e.into()),
    };

    Ok((graph, RouteReport { routes, metrics }))
}

pub fn write_geojson(path: &Path, graph: &RoadGraph, report: &RouteReport) -> anyhow::Result<()> {
    let metrics = report.metrics.as_ref().map(|(a, b)| (a, b));
    let geojson = routes_to_geojson_string(graph, &report.routes, metrics)?;
    std::fs::write(path, geojson)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Routes written to {}", path.display());
    Ok(())
}

pub fn run_summarize(
    accidents: &Path,
    output: &Path,
    bbox: Option<BoundingBox>,
) -> anyhow::Result<usize> {
    let records = load_accident_records(&AccidentDataConfig {
        path: accidents.to_path_buf(),
        bbox,
    })?;
    let table = build_severity_table(&records)?;
    write_severity_table(output, &table)?;
    Ok(table.len())
}

pub fn run_distribution(accidents: &Path) -> anyhow::Result<Vec<String>> {
    let records = load_accident_records(&AccidentDataConfig {
        path: accidents.to_path_buf(),
        bbox: None,
    })?;
    let table = build_severity_table(&records)?;

    let mut lines = vec!["Mean Severity Score,Number of Locations".to_string()];
    lines.extend(
        table
            .severity_distribution()
            .into_iter()
            .map(|(severity, count)| format!("{severity},{count}")),
    );
    Ok(lines)
}

pub fn run_bounds(accidents: &Path) -> anyhow::Result<BoundingBox> {
    let records = load_accident_records(&AccidentDataConfig {
        path: accidents.to_path_buf(),
        bbox: None,
    })?;
    coordinate_bounds(&records).context("Accident file contains no records")
}
