//! GeoExplorer - map exploration with AI-generated location descriptions
//!
//! Main entry point for the GeoExplorer CLI and HTTP API.

mod app;
mod cli;
mod commands;
mod server;

use clap::Parser;
use tracing::warn;

use geoexplorer_config::{ConfigLoader, ConfigValidator};

use crate::app::App;
use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    server::init_tracing(&config.logging)?;

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }
    if let Some(err) = validation.into_error() {
        return Err(err.into());
    }

    let app = App::build(config).await?;
    let fake_maps = cli.fake_maps;

    match cli.command {
        None => server::run_server(app, None, None).await,
        Some(Commands::Serve { host, port }) => server::run_server(app, host, port).await,
        Some(Commands::Describe { lat, lng }) => commands::describe(&app, fake_maps, lat, lng).await,
        Some(Commands::Chat { message, lat, lng }) => {
            commands::chat(&app, fake_maps, &message, lat, lng).await
        }
        Some(Commands::Locations { action }) => commands::locations(&app, fake_maps, action).await,
        Some(Commands::Settings { action }) => commands::settings(&app, action).await,
        Some(Commands::Geocode { address }) => commands::geocode(&app, fake_maps, &address).await,
        Some(Commands::ReverseGeocode { lat, lng }) => {
            commands::reverse_geocode(&app, fake_maps, lat, lng).await
        }
    }
}
