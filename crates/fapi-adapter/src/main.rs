//! Futures order-submission adapter - entry point.
//!
//! Resolves each input item into a venue action and either previews it
//! (dry-run) or dispatches it against the exchange.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

/// Futures order-submission adapter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via FAPI_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Input file: a JSON array of order intent items
    #[arg(short, long)]
    input: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    fapi_telemetry::init_logging()?;

    info!("Starting fapi-adapter v{}", env!("CARGO_PKG_VERSION"));

    // Determine config: CLI arg > FAPI_CONFIG env var > built-in defaults
    let config_path = args.config.or_else(|| std::env::var("FAPI_CONFIG").ok());
    let config = match config_path {
        Some(path) => {
            info!(config_path = %path, "Loading configuration");
            fapi_adapter::AppConfig::from_file(&path)?
        }
        None => fapi_adapter::AppConfig::default(),
    };

    let items = fapi_adapter::load_items(&args.input)?;
    info!(items = items.len(), mode = ?config.mode, "Processing batch");

    let app = fapi_adapter::Application::new(config)?;
    let reports = app.run(items).await;

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        warn!(failed, total = reports.len(), "Batch finished with failures");
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);

    Ok(())
}
