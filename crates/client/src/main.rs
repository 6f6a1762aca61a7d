//! `tamagotchi` binary.
//!
//! Loads `.env`, reads [`RuntimeConfig`] from the environment, writes logs to
//! the platform cache directory, and hands stdin to the command loop.
//!
//! ```bash
//! PET_SEED=42 PET_FIGHT_ROUND_MS=1000 cargo run -p pet-client
//! ```
mod app;
mod command;
mod logging;
mod view;

use anyhow::Result;
use pet_runtime::{Runtime, RuntimeConfig};

use crate::app::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    let (_guard, log_file) = logging::setup_logging()?;

    tracing::info!(seed = ?config.seed, content = ?config.content_path, "Starting tamagotchi client");
    println!("logging to {}", log_file.display());

    let runtime = Runtime::start(config).await?;
    CliApp::new(runtime).run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
