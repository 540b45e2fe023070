use std::sync::Arc;

use longweekend_backend::{
    app, config::Config, services::holiday_source::NagerHolidaySource, state::AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "longweekend_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        holiday_api_url = %config.holiday_api_url,
        holiday_api_timeout_seconds = config.holiday_api_timeout_seconds,
        time_zone = %config.time_zone,
        bind_addr = %config.bind_addr,
        cors_allow_origins = ?config.cors_allow_origins,
        "Loaded configuration from environment/.env"
    );

    let holiday_source = NagerHolidaySource::new(&config)?;
    let addr = config.bind_addr;
    let state = AppState::new(config, Arc::new(holiday_source));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
