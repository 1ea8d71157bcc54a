use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use game_cli::{clock::SystemClock, config::Config};
use game_persistence::connection::connect_and_migrate;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they don't mix with the game screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting party game...");

    let db = match connect_and_migrate(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    if let Err(e) = game_cli::run(&config, db, stdin.lock(), io::stdout(), Box::new(SystemClock)).await {
        error!("Game stopped: {:#}", e);
        std::process::exit(1);
    }
}
