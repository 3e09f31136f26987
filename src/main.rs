use clap::Parser;
use saferoute::{
    AppConfig, Cli, Command,
    commands::{run_bounds, run_distribution, run_route, run_summarize, write_geojson},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Route {
            config,
            from,
            to,
            geojson,
        } => {
            let config = AppConfig::load(&config)?;
            let (graph, report) = run_route(&config, from, to)?;
            for line in report.lines() {
                println!("{line}");
            }
            if let Some(path) = geojson {
                write_geojson(&path, &graph, &report)?;
            }
        }
        Command::Summarize {
            accidents,
            output,
            bbox,
        } => {
            let locations = run_summarize(&accidents, &output, bbox)?;
            info!("Summarized {locations} locations into {}", output.display());
        }
        Command::Distribution { accidents } => {
            for line in run_distribution(&accidents)? {
                println!("{line}");
            }
        }
        Command::Bounds { accidents } => {
            let bounds = run_bounds(&accidents)?;
            println!("Minimum Latitude: {}", bounds.min_latitude);
            println!("Maximum Latitude: {}", bounds.max_latitude);
            println!("Minimum Longitude: {}", bounds.min_longitude);
            println!("Maximum Longitude: {}", bounds.max_longitude);
        }
    }
    Ok(())
}
