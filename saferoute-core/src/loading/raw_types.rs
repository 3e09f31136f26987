use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FeedNode {
    #[serde(alias = "osmid")]
    pub id: i64,
    #[serde(alias = "y", alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "x", alias = "longitude")]
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct FeedEdge {
    pub u: i64,
    pub v: i64,
    pub length: f64,
    #[serde(default, deserialize_with = "super::parser::deserialize_flag")]
    pub oneway: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SeveritySummaryRow {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    pub number_of_accidents: u32,
    pub mean_severity_score: f64,
}
