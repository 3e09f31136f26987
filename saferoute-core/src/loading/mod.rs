//! This module is responsible for loading the road network and accident
//! records from CSV files and writing severity summaries back out.

mod accidents;
mod builder;
mod config;
mod parser;
mod raw_types;

pub use accidents::{load_accident_records, write_severity_table};
pub use builder::load_road_graph;
pub use config::{AccidentDataConfig, RoadNetworkConfig};
