use tracing::{error, info, warn};

use anonboard::web::WebServer;
use anonboard::{Config, Database};

#[tokio::main]
async fn main() {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = anonboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        anonboard::logging::init_console_only(&config.logging.level);
    }

    info!("anonboard - Anonymous message board");

    // Environment overrides are applied once logging can report ignored ones
    for ignored in config.apply_env_overrides() {
        warn!("{}", ignored);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let db = match Database::open_with_max_connections(
        &config.database.path,
        config.database.max_connections,
    )
    .await
    {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database {}: {}", config.database.path, e);
            std::process::exit(1);
        }
    };
    info!(
        "Database opened at {} (schema version {})",
        config.database.path,
        db.schema_version().await.unwrap_or(0)
    );

    let server = WebServer::from_database(&config.server, db);
    info!("Server configured on {}", config.bind_addr());

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
