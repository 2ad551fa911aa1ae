//! CLI definitions for GeoExplorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GeoExplorer CLI.
#[derive(Parser)]
#[command(name = "geoexplorer")]
#[command(about = "Explore places with AI-generated descriptions and a location assistant")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Use the built-in offline geocoder instead of Google Maps
    #[arg(long, global = true)]
    pub fake_maps: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP API in foreground (default)
    Serve {
        /// Server host (overrides [server] host)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides [server] port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Describe the location at the given coordinates
    Describe {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,
    },

    /// Ask the assistant a question about the map centre
    Chat {
        /// The question
        message: String,

        /// Map centre latitude (defaults to [maps] center_lat)
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Map centre longitude (defaults to [maps] center_lng)
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,
    },

    /// Saved location management
    Locations {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// API key management
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Resolve an address to coordinates
    Geocode {
        address: String,
    },

    /// Resolve coordinates to an address
    ReverseGeocode {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,
    },
}

#[derive(Subcommand)]
pub(crate) enum LocationAction {
    /// List saved locations
    List {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Save a location
    Save {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,

        /// Title (defaults to the first part of the address)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Delete the saved location at INDEX
    Delete {
        index: usize,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Show the stored API keys
    Show,

    /// Store both API keys
    Set {
        /// Google Maps API key
        #[arg(long, env = "GEOEXPLORER_MAPS_KEY")]
        maps_key: String,

        /// Google Gemini API key
        #[arg(long, env = "GEOEXPLORER_GEMINI_KEY")]
        gemini_key: String,
    },
}
