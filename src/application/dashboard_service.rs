// Dashboard service - Use case for building the live vest dashboard
use crate::application::generator::round_tenths;
use crate::application::vitals_source::{VitalsSnapshot, VitalsSource};
use crate::domain::alert::Alert;
use crate::domain::dashboard::Dashboard;
use crate::domain::error::GenerationError;
use crate::domain::series::{GeneratedSeries, MetricKind, SampleSeries, SampleWindow};
use crate::domain::telemetry::{ChartData, SeriesData, TileData, TimeSeriesPoint, downsample};
use crate::domain::vest::VestStatus;
use chrono::NaiveDateTime;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn VitalsSource>,
    device: VestStatus,
    recent_limit: usize,
    max_chart_points: usize,
}

impl DashboardService {
    pub fn new(
        source: Arc<dyn VitalsSource>,
        device: VestStatus,
        recent_limit: usize,
        max_chart_points: usize,
    ) -> Self {
        Self {
            source,
            device,
            recent_limit,
            max_chart_points,
        }
    }

    pub fn get_dashboard(
        &self,
        window: SampleWindow,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<Dashboard, GenerationError> {
        let snapshot = self.source.capture(window, now, seed)?;

        let tiles = self.build_tiles(&snapshot);
        let charts = self.build_charts(&snapshot);
        let alert_count = snapshot.alerts.len();
        let recent_alerts: Vec<Alert> = snapshot.alerts.into_iter().take(self.recent_limit).collect();

        Ok(Dashboard {
            title: format!("Dashboard for {}", self.device.wearer),
            generated_at: snapshot.captured_at,
            window: snapshot.window.summary(),
            device: self.device.clone(),
            tiles,
            charts,
            recent_alerts,
            alert_count,
        })
    }

    /// Full alert list, most recent first.
    pub fn get_alerts(
        &self,
        window: SampleWindow,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<Vec<Alert>, GenerationError> {
        Ok(self.source.capture(window, now, seed)?.alerts)
    }

    pub fn get_series(
        &self,
        kind: MetricKind,
        window: SampleWindow,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<GeneratedSeries, GenerationError> {
        self.source.series(kind, window, now, seed)
    }

    fn build_tiles(&self, snapshot: &VitalsSnapshot) -> Vec<TileData> {
        let mut tiles = Vec::new();

        if let Some(current) = snapshot.heart_rate.latest() {
            let delta = snapshot
                .heart_rate
                .previous()
                .map(|prev| current.value as f64 - prev.value as f64);
            tiles.push(TileData::number("heart_rate", "Heart rate", "BPM", current.value as f64, delta, 0));
        }

        if let Some(current) = snapshot.temperature.latest() {
            let delta = snapshot
                .temperature
                .previous()
                .map(|prev| round_tenths(current.value - prev.value));
            tiles.push(TileData::number("temperature", "Temperature", "°C", current.value, delta, 1));
        }

        if let Some(current) = snapshot.activity.latest() {
            let delta = snapshot
                .activity
                .previous()
                .map(|prev| current.value.steps.saturating_sub(prev.value.steps) as f64);
            tiles.push(TileData::number("steps", "Steps today", "steps", current.value.steps as f64, delta, 0));
        }

        if let Some(current) = snapshot.posture.latest() {
            tiles.push(TileData::text("posture", "Current posture", current.value.to_string()));
        }

        tiles
    }

    fn build_charts(&self, snapshot: &VitalsSnapshot) -> Vec<ChartData> {
        let mut charts = Vec::new();

        // A chart without samples is dropped
        if !snapshot.heart_rate.is_empty() {
            let points = self.points(&snapshot.heart_rate, |bpm| *bpm as f64);
            charts.push(ChartData::line(
                "heart_rate",
                "Heart rate",
                "BPM",
                0,
                SeriesData::new("heart_rate", "BPM", None, points),
            ));
        }

        if !snapshot.temperature.is_empty() {
            let points = self.points(&snapshot.temperature, |celsius| *celsius);
            charts.push(
                ChartData::line(
                    "temperature",
                    "Body temperature",
                    "°C",
                    1,
                    SeriesData::new("temperature", "°C", Some("firebrick"), points),
                )
                .with_bounds(35.5, 38.5),
            );
        }

        if !snapshot.activity.is_empty() {
            let steps = self.points(&snapshot.activity, |reading| reading.steps as f64);
            let movement = self.points(&snapshot.activity, |reading| reading.movement_intensity);
            charts.push(ChartData::multi_line(
                "activity",
                "Physical activity",
                vec![
                    SeriesData::new("steps", "Cumulative steps", Some("royalblue"), steps),
                    SeriesData::new("movement_intensity", "Movement intensity", Some("orange"), movement),
                ],
            ));
        }

        charts
    }

    fn points<T>(&self, series: &SampleSeries<T>, value: impl Fn(&T) -> f64) -> Vec<TimeSeriesPoint> {
        let points = series
            .iter()
            .map(|sample| TimeSeriesPoint::new(sample.timestamp, value(&sample.value)))
            .collect();
        downsample(points, self.max_chart_points)
    }
}
