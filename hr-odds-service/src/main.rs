use hr_odds_service::config::{HrOddsConfig, SERVICE_NAME};
use hr_odds_service::services::init_metrics;
use hr_odds_service::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = HrOddsConfig::load()?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );

    // Must run before any metric is recorded
    init_metrics();

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        database = %config.mongodb.database,
        collection = %config.mongodb.collection,
        "Starting home run odds service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Server stopped");
    Ok(())
}
