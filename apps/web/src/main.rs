use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use web::{ApiClient, FileStore, PageController, WebConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WebConfig::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting portfolio page controller v{}", env!("CARGO_PKG_VERSION"));
    info!("Content API at {}", config.api_url);

    let store = FileStore::open(&config.preferences_path);
    let mut controller =
        PageController::new(ApiClient::new(&config.api_url), Box::new(store), config.prefers_dark);

    let report = controller.load_content().await;
    if !report.online {
        info!("Backend unreachable; static content stays on display");
    }

    let html = controller.render();
    match &config.output_path {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            info!("Wrote page to {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
