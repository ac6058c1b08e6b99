// Telemetry widget models (tiles and charts)
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TileValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub value: TileValue,
    /// Change against the previous sample.
    pub delta: Option<f64>,
    pub precision: i32,
}

impl TileData {
    pub fn number(id: &str, title: &str, unit: &str, value: f64, delta: Option<f64>, precision: i32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: Some(unit.to_string()),
            value: TileValue::Number(value),
            delta,
            precision,
        }
    }

    pub fn text(id: &str, title: &str, value: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: None,
            value: TileValue::Text(value),
            delta: None,
            precision: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<TimeSeriesPoint>,
}

impl SeriesData {
    pub fn new(id: &str, name: &str, color: Option<&str>, points: Vec<TimeSeriesPoint>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.map(str::to_string),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub kind: ChartKind,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub fraction_digits: Option<i32>,
    pub series: Vec<SeriesData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    MultiLine,
}

impl ChartData {
    pub fn line(id: &str, title: &str, unit: &str, fraction_digits: i32, series: SeriesData) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: Some(unit.to_string()),
            kind: ChartKind::Line,
            y_min: None,
            y_max: None,
            fraction_digits: Some(fraction_digits),
            series: vec![series],
        }
    }

    pub fn multi_line(id: &str, title: &str, series: Vec<SeriesData>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: None,
            kind: ChartKind::MultiLine,
            y_min: None,
            y_max: None,
            fraction_digits: None,
            series,
        }
    }

    pub fn with_bounds(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = Some(y_min);
        self.y_max = Some(y_max);
        self
    }
}

/// Downsample time series points using bucket averaging
pub fn downsample(points: Vec<TimeSeriesPoint>, max_points: usize) -> Vec<TimeSeriesPoint> {
    if max_points == 0 || points.len() <= max_points {
        return points;
    }

    let bucket_size = points.len().div_ceil(max_points);
    let mut downsampled = Vec::with_capacity(max_points);

    for chunk in points.chunks(bucket_size) {
        // Use middle point's timestamp and average value
        let mid_idx = chunk.len() / 2;
        let avg_value = chunk.iter().map(|p| p.value).sum::<f64>() / chunk.len() as f64;

        downsampled.push(TimeSeriesPoint::new(chunk[mid_idx].timestamp, avg_value));
    }

    downsampled
}
