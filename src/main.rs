// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::history_service::HistoryService;
use crate::domain::vest::VestStatus;
use crate::infrastructure::config::load_config;
use crate::infrastructure::simulated_vest::SimulatedVest;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_config()?;

    // Simulated device stands in for sensor ingestion (infrastructure layer)
    let vest = Arc::new(SimulatedVest::new(
        app_config.alerts.clone(),
        app_config.generation.seed,
    ));

    // Create services (application layer)
    let device = VestStatus::new(
        &app_config.vest.wearer,
        app_config.vest.battery_percent,
        app_config.vest.signal,
    );
    let dashboard_service = DashboardService::new(
        vest,
        device,
        app_config.alerts.recent_limit,
        app_config.generation.max_chart_points,
    );
    let history_service = HistoryService::new(app_config.generation.seed);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        history_service,
        generation: app_config.generation.clone(),
        history: app_config.history.clone(),
        alert_rules: app_config.alerts.clone(),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind_address.parse()?;
    tracing::info!("Starting vest-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
