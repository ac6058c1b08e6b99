// Dashboard domain model
use super::alert::Alert;
use super::telemetry::{ChartData, TileData};
use super::vest::VestStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub generated_at: NaiveDateTime,
    pub window: WindowSummary,
    pub device: VestStatus,
    pub tiles: Vec<TileData>,
    pub charts: Vec<ChartData>,
    pub recent_alerts: Vec<Alert>,
    pub alert_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowSummary {
    pub duration_minutes: i64,
    pub interval_minutes: i64,
    pub samples: usize,
}
