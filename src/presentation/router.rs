// Route table for the HTTP surface
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_alerts, get_dashboard, get_history, get_series, get_settings, health_check,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/series/:kind", get(get_series))
        .route("/alerts", get(get_alerts))
        .route("/history", get(get_history))
        .route("/settings", get(get_settings))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
