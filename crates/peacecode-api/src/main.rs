use tracing_subscriber::EnvFilter;

use peacecode_api::config::{ApiConfig, LogFormat};
use peacecode_api::state::AppState;
use peacecode_instruments::registry::Registry;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        // Structured JSON logging for CloudWatch
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).pretty().init(),
    }

    let registry = Registry::standard()?;
    tracing::info!(
        instruments = registry.iter().count(),
        "instrument registry loaded"
    );

    let app = peacecode_api::app(AppState::new(registry), config.cors_layer());

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
