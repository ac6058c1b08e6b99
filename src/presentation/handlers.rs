// HTTP request handlers
use crate::application::alerts::AlertRules;
use crate::domain::alert::Alert;
use crate::domain::dashboard::Dashboard;
use crate::domain::error::GenerationError;
use crate::domain::history::History;
use crate::domain::series::{GeneratedSeries, MetricKind, SampleWindow};
use crate::infrastructure::config::{GenerationSettings, HistorySettings};
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    pub hours: Option<i64>,
    pub interval_minutes: Option<i64>,
    pub seed: Option<u64>,
}

impl WindowQuery {
    fn window(&self, defaults: &GenerationSettings) -> Result<SampleWindow, GenerationError> {
        SampleWindow::from_hours(
            self.hours.unwrap_or(defaults.duration_hours),
            self.interval_minutes.unwrap_or(defaults.interval_minutes),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub generation: GenerationSettings,
    pub history: HistorySettings,
    pub alerts: AlertRules,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Live dashboard: tiles, charts and the most recent alerts
pub async fn get_dashboard(
    query: Result<Query<WindowQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, ApiError> {
    let Query(query) = query?;
    let window = query.window(&state.generation)?;
    let dashboard = state
        .dashboard_service
        .get_dashboard(window, local_now(), query.seed)?;
    Ok(Json(dashboard))
}

pub async fn get_series(
    Path(kind): Path<String>,
    query: Result<Query<WindowQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<GeneratedSeries>, ApiError> {
    let kind: MetricKind = kind.parse()?;
    let Query(query) = query?;
    let window = query.window(&state.generation)?;
    let series = state
        .dashboard_service
        .get_series(kind, window, local_now(), query.seed)?;
    Ok(Json(series))
}

pub async fn get_alerts(
    query: Result<Query<WindowQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    let Query(query) = query?;
    let window = query.window(&state.generation)?;
    let alerts = state
        .dashboard_service
        .get_alerts(window, local_now(), query.seed)?;
    Ok(Json(alerts))
}

pub async fn get_history(
    query: Result<Query<HistoryQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<History>, ApiError> {
    let Query(query) = query?;
    let days = query.days.unwrap_or(state.history.days);
    let history = state
        .history_service
        .get_history(days, local_now().date(), query.seed)?;
    Ok(Json(history))
}

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<SettingsView> {
    Json(SettingsView {
        generation: state.generation.clone(),
        history: state.history.clone(),
        alerts: state.alert_rules.clone(),
    })
}
