//! Logging setup and the `serve` command.

use std::sync::Arc;

use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use geoexplorer_api::{ApiServer, AppState, ServerConfig};
use geoexplorer_config::{ConfigLoader, LoggingConfig};

use crate::app::App;

/// Initialize tracing with console output and, when `[logging] dir` is set,
/// a daily rotated log file.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match logging.dir {
        Some(ref dir) => {
            let log_dir = ConfigLoader::expand_path(dir);
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("geoexplorer")
                .filename_suffix("log")
                .max_log_files(14)
                .build(&log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The guard flushes the file writer when dropped
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

/// Run the HTTP API in foreground.
pub(crate) async fn run_server(
    app: App,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting GeoExplorer v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::new(
        host.unwrap_or_else(|| app.config.server.host.clone()),
        port.unwrap_or(app.config.server.port),
    );
    let state = Arc::new(
        AppState::new(
            app.client.clone(),
            app.relay.settings().clone(),
            app.store_id(),
        )
        .with_allowed_origins(app.config.server.allowed_origins.clone()),
    );

    ApiServer::new(config, state).run().await
}
