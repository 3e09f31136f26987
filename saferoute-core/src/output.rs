//! `GeoJSON` export of routed paths for map layers

use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::json;

use crate::{Error, PathMetrics, RoadGraph, model::Path, routing::DualRoute};

/// Converts a path into a `LineString` feature carrying `properties`
///
/// # Errors
///
/// Returns [`Error::GeoJsonError`] if the feature cannot be assembled
pub fn path_to_feature(
    graph: &RoadGraph,
    path: &Path,
    properties: serde_json::Value,
) -> Result<Feature, Error> {
    let coords: Vec<Coord<f64>> = path
        .nodes()
        .iter()
        .filter_map(|&idx| graph.node(idx).map(|node| node.geometry.into()))
        .collect();
    let geometry = Geometry::new((&LineString::new(coords)).into());

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": properties,
    });
    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

/// Both routes as a `FeatureCollection`, one feature per route
///
/// # Errors
///
/// Returns [`Error::GeoJsonError`] if a feature cannot be assembled
pub fn routes_to_geojson(
    graph: &RoadGraph,
    routes: &DualRoute,
    metrics: Option<(&PathMetrics, &PathMetrics)>,
) -> Result<FeatureCollection, Error> {
    let (shortest_metrics, safest_metrics) = metrics.unzip();

    let features = vec![
        path_to_feature(
            graph,
            &routes.shortest,
            route_properties("shortest", routes.shortest_cost, shortest_metrics),
        )?,
        path_to_feature(
            graph,
            &routes.safest,
            route_properties("safest", routes.safest_cost, safest_metrics),
        )?,
    ];

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

/// Serialized form of [`routes_to_geojson`]
///
/// # Errors
///
/// Returns [`Error::GeoJsonError`] if serialization fails
pub fn routes_to_geojson_string(
    graph: &RoadGraph,
    routes: &DualRoute,
    metrics: Option<(&PathMetrics, &PathMetrics)>,
) -> Result<String, Error> {
    serde_json::to_string(&routes_to_geojson(graph, routes, metrics)?)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn route_properties(kind: &str, cost: f64, metrics: Option<&PathMetrics>) -> serde_json::Value {
    let mut properties = json!({
        "route": kind,
        "cost": cost,
    });
    if let Some(metrics) = metrics {
        properties["distance"] = json!(metrics.total_distance);
        properties["mean_severity"] = json!(metrics.mean_severity);
        properties["accident_count"] = json!(metrics.accident_count);
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RoadGraphBuilder, path_metrics, route};

    #[test]
    fn exports_one_feature_per_route() -> Result<(), Error> {
        let mut builder = RoadGraphBuilder::new();
        builder.add_node(1, 51.500, -0.100)?;
        builder.add_node(2, 51.501, -0.101)?;
        builder.add_two_way_edge(1, 2, 130.0)?;
        let graph = builder.build();

        let routes = route(&graph, 1, 2)?;
        let shortest = path_metrics(&graph, &routes.shortest)?;
        let safest = path_metrics(&graph, &routes.safest)?;
        let collection = routes_to_geojson(&graph, &routes, Some((&shortest, &safest)))?;

        assert_eq!(collection.features.len(), 2);
        let first = &collection.features[0];
        assert_eq!(
            first.property("route").and_then(|v| v.as_str()),
            Some("shortest")
        );
        assert_eq!(
            first.property("distance").and_then(serde_json::Value::as_f64),
            Some(130.0)
        );
        let geometry = serde_json::to_value(&first.geometry)
            .map_err(|e| Error::GeoJsonError(e.to_string()))?;
        assert_eq!(geometry["type"], "LineString");
        assert_eq!(geometry["coordinates"][0], json!([-0.100, 51.500]));
        assert_eq!(geometry["coordinates"][1], json!([-0.101, 51.501]));
        Ok(())
    }
}
