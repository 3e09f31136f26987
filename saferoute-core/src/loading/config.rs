use std::path::PathBuf;

use serde::Deserialize;

use crate::model::BoundingBox;

/// Location and interpretation of the road network CSV files
#[derive(Debug, Clone, Deserialize)]
pub struct RoadNetworkConfig {
    /// `id,lat,lon` rows
    pub nodes_path: PathBuf,
    /// `u,v,length[,oneway]` rows
    pub edges_path: PathBuf,
    /// Whether an edge row without `oneway` is traversable in both directions
    #[serde(default = "default_two_way")]
    pub two_way_by_default: bool,
}

fn default_two_way() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccidentDataConfig {
    pub path: PathBuf,
    /// Accidents outside this box are dropped while loading
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}
