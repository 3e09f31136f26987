use std::path::Path;

use anyhow::Context;
use saferoute_core::prelude::*;
use serde::Deserialize;

/// Contents of the TOML configuration file
///
/// ```toml
/// [network]
/// nodes_path = "data/nodes.csv"
/// edges_path = "data/edges.csv"
///
/// [accidents]
/// path = "data/collisions.csv"
/// bbox = { min_latitude = 51.355, max_latitude = 51.652, min_longitude = -0.453, max_longitude = 0.151 }
///
/// [routing]
/// attribution_policy = "source-first"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub network: RoadNetworkConfig,
    pub accidents: AccidentDataConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub attribution_policy: AttributionPolicy,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("Invalid configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }
}
