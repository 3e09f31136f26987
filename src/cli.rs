use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geo::Point;

#[derive(Debug, Parser)]
#[command(name = "saferoute", version, about = "Shortest and safest routes over a road network")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the shortest and the safest route between two coordinates
    Route {
        /// TOML file describing the network and accident data
        #[arg(short, long)]
        config: PathBuf,
        /// Start as `lat,lon`
        #[arg(long, value_parser = parse_lat_lon, allow_hyphen_values = true)]
        from: Point<f64>,
        /// Destination as `lat,lon`
        #[arg(long, value_parser = parse_lat_lon, allow_hyphen_values = true)]
        to: Point<f64>,
        /// Write both routes as GeoJSON to this file
        #[arg(long)]
        geojson: Option<PathBuf>,
    },
    /// Aggregate accidents per exact location into a summary CSV
    Summarize {
        #[arg(short, long)]
        accidents: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Keep only accidents inside `min_lat,max_lat,min_lon,max_lon`
        #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
        bbox: Option<saferoute_core::model::BoundingBox>,
    },
    /// Count locations per rounded mean severity
    Distribution {
        #[arg(short, long)]
        accidents: PathBuf,
    },
    /// Print the latitude/longitude extent of the accident data
    Bounds {
        #[arg(short, long)]
        accidents: PathBuf,
    },
}

fn parse_numbers<const N: usize>(value: &str) -> Result<[f64; N], String> {
    let numbers = value
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("'{part}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    numbers
        .try_into()
        .map_err(|_| format!("expected {N} comma separated numbers, got '{value}'"))
}

/// Parses `lat,lon` into a point with x = longitude
pub fn parse_lat_lon(value: &str) -> Result<Point<f64>, String> {
    let [lat, lon] = parse_numbers::<2>(value)?;
    Ok(Point::new(lon, lat))
}

pub fn parse_bbox(value: &str) -> Result<saferoute_core::model::BoundingBox, String> {
    let [min_lat, max_lat, min_lon, max_lon] = parse_numbers::<4>(value)?;
    Ok(saferoute_core::model::BoundingBox::new(
        min_lat, max_lat, min_lon, max_lon,
    ))
}
