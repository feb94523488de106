//! Status Kit showcase server.
//!
//! Entry point serving the component showcase page and HTML fragments.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use status_kit::{config::AppConfig, server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init();

    let config = Arc::new(AppConfig::load()?);

    info!(
        name: "config.loaded",
        address = %config.bind_addr(),
        static_dir = %config.server.static_dir,
        "Configuration loaded"
    );

    server::start_server(config).await?;
    Ok(())
}
