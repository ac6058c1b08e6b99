// Sample series produced by the vest generators
use super::dashboard::WindowSummary;
use super::error::GenerationError;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Upper bound on samples per series, keeps a single request bounded.
pub const MAX_SAMPLES: i64 = 10_000;
/// Longest trailing window accepted.
pub const MAX_DURATION_DAYS: i64 = 366;

/// Trailing window `[now - duration, now]` sampled every `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    duration: TimeDelta,
    interval: TimeDelta,
}

impl SampleWindow {
    pub fn new(duration: TimeDelta, interval: TimeDelta) -> Result<Self, GenerationError> {
        if interval <= TimeDelta::zero() {
            return Err(GenerationError::invalid(format!(
                "sampling interval must be positive, got {} ms",
                interval.num_milliseconds()
            )));
        }
        if interval < TimeDelta::milliseconds(1) {
            return Err(GenerationError::invalid(format!(
                "sampling interval must be at least 1 ms, got {} µs",
                interval.num_microseconds().unwrap_or_default()
            )));
        }
        if duration < TimeDelta::zero() {
            return Err(GenerationError::invalid(format!(
                "duration must not be negative, got {} minutes",
                duration.num_minutes()
            )));
        }
        if duration.num_days() > MAX_DURATION_DAYS {
            return Err(GenerationError::invalid(format!(
                "duration of {} days exceeds the {} day limit",
                duration.num_days(),
                MAX_DURATION_DAYS
            )));
        }

        let samples = duration.num_milliseconds() / interval.num_milliseconds() + 1;
        if samples > MAX_SAMPLES {
            return Err(GenerationError::invalid(format!(
                "window would produce {} samples, limit is {}",
                samples, MAX_SAMPLES
            )));
        }

        Ok(Self { duration, interval })
    }

    /// Window from whole hours and a sampling interval in minutes.
    pub fn from_hours(hours: i64, interval_minutes: i64) -> Result<Self, GenerationError> {
        let duration = TimeDelta::try_hours(hours)
            .ok_or_else(|| GenerationError::invalid(format!("duration of {hours} hours is out of range")))?;
        let interval = TimeDelta::try_minutes(interval_minutes).ok_or_else(|| {
            GenerationError::invalid(format!("interval of {interval_minutes} minutes is out of range"))
        })?;
        Self::new(duration, interval)
    }

    pub fn summary(&self) -> WindowSummary {
        WindowSummary {
            duration_minutes: self.duration.num_minutes(),
            interval_minutes: self.interval.num_minutes(),
            samples: self.len(),
        }
    }

    /// Number of samples: `floor(duration / interval) + 1`.
    pub fn len(&self) -> usize {
        (self.duration.num_milliseconds() / self.interval.num_milliseconds() + 1) as usize
    }

    /// Evenly spaced timestamps starting at `now - duration`, never past `now`.
    pub fn timestamps(self, now: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        let start = now - self.duration;
        let interval = self.interval;
        (0..self.len()).map(move |i| start + interval * i as i32)
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self {
            duration: TimeDelta::hours(12),
            interval: TimeDelta::minutes(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample<T> {
    pub timestamp: NaiveDateTime,
    pub value: T,
}

impl<T> Sample<T> {
    pub fn new(timestamp: NaiveDateTime, value: T) -> Self {
        Self { timestamp, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleSeries<T> {
    samples: Vec<Sample<T>>,
}

impl<T> SampleSeries<T> {
    pub fn new(samples: Vec<Sample<T>>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&Sample<T>> {
        self.samples.last()
    }

    /// Sample right before the latest one.
    pub fn previous(&self) -> Option<&Sample<T>> {
        self.samples.len().checked_sub(2).map(|i| &self.samples[i])
    }
}

impl<T> FromIterator<Sample<T>> for SampleSeries<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a SampleSeries<T> {
    type Item = &'a Sample<T>;
    type IntoIter = std::slice::Iter<'a, Sample<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// One activity sample: running step total and movement intensity (0-10).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityReading {
    pub steps: u64,
    pub movement_intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Posture {
    Lying,
    Sitting,
    Standing,
    BadPosture,
}

impl Posture {
    pub fn label(&self) -> &'static str {
        match self {
            Posture::Lying => "lying",
            Posture::Sitting => "sitting",
            Posture::Standing => "standing",
            Posture::BadPosture => "bad posture",
        }
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    HeartRate,
    Temperature,
    Activity,
    Posture,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::HeartRate => "heart_rate",
            MetricKind::Temperature => "temperature",
            MetricKind::Activity => "activity",
            MetricKind::Posture => "posture",
        }
    }
}

impl FromStr for MetricKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart_rate" => Ok(MetricKind::HeartRate),
            "temperature" => Ok(MetricKind::Temperature),
            "activity" => Ok(MetricKind::Activity),
            "posture" => Ok(MetricKind::Posture),
            other => Err(GenerationError::UnknownMetric(other.to_string())),
        }
    }
}

/// Output of `generate_series`, one variant per metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "samples", rename_all = "snake_case")]
pub enum GeneratedSeries {
    HeartRate(SampleSeries<u32>),
    Temperature(SampleSeries<f64>),
    Activity(SampleSeries<ActivityReading>),
    Posture(SampleSeries<Posture>),
}

impl GeneratedSeries {
    pub fn kind(&self) -> MetricKind {
        match self {
            GeneratedSeries::HeartRate(_) => MetricKind::HeartRate,
            GeneratedSeries::Temperature(_) => MetricKind::Temperature,
            GeneratedSeries::Activity(_) => MetricKind::Activity,
            GeneratedSeries::Posture(_) => MetricKind::Posture,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GeneratedSeries::HeartRate(s) => s.len(),
            GeneratedSeries::Temperature(s) => s.len(),
            GeneratedSeries::Activity(s) => s.len(),
            GeneratedSeries::Posture(s) => s.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_one_hour_window_has_thirteen_samples() {
        let window = SampleWindow::from_hours(1, 5).unwrap();
        assert_eq!(window.len(), 13);

        let stamps: Vec<_> = window.timestamps(noon()).collect();
        assert_eq!(stamps.len(), 13);
        assert_eq!(stamps[0], noon() - TimeDelta::hours(1));
        assert_eq!(*stamps.last().unwrap(), noon());

        let summary = window.summary();
        assert_eq!(summary.duration_minutes, 60);
        assert_eq!(summary.interval_minutes, 5);
        assert_eq!(summary.samples, 13);
    }

    #[test]
    fn test_uneven_window_stops_before_now() {
        let window = SampleWindow::new(TimeDelta::minutes(12), TimeDelta::minutes(5)).unwrap();
        let stamps: Vec<_> = window.timestamps(noon()).collect();

        assert_eq!(stamps.len(), 3);
        assert!(*stamps.last().unwrap() <= noon());
        for pair in stamps.windows(2) {
            assert_eq!(pair[1] - pair[0], TimeDelta::minutes(5));
        }
    }

    #[test]
    fn test_zero_duration_is_a_single_sample() {
        let window = SampleWindow::from_hours(0, 5).unwrap();
        assert_eq!(window.timestamps(noon()).collect::<Vec<_>>(), vec![noon()]);
    }

    #[test]
    fn test_rejects_bad_windows() {
        assert!(matches!(
            SampleWindow::from_hours(12, 0),
            Err(GenerationError::InvalidConfiguration(_))
        ));
        assert!(SampleWindow::from_hours(12, -5).is_err());
        assert!(SampleWindow::from_hours(-1, 5).is_err());
        assert_eq!(
            SampleWindow::new(TimeDelta::hours(1), TimeDelta::microseconds(10)),
            Err(GenerationError::invalid("sampling interval must be at least 1 ms, got 10 µs"))
        );
        // 30 days at one minute is 43_201 samples
        assert!(SampleWindow::from_hours(24 * 30, 1).is_err());
        assert!(SampleWindow::from_hours(24 * 400, 60 * 24).is_err());
    }

    #[test]
    fn test_metric_kind_parsing() {
        assert_eq!("heart_rate".parse::<MetricKind>(), Ok(MetricKind::HeartRate));
        assert_eq!("posture".parse::<MetricKind>(), Ok(MetricKind::Posture));
        assert_eq!(
            "blood_pressure".parse::<MetricKind>(),
            Err(GenerationError::UnknownMetric("blood_pressure".to_string()))
        );
    }

    #[test]
    fn test_latest_and_previous() {
        let series: SampleSeries<u32> = (0..3)
            .map(|i| Sample::new(noon() + TimeDelta::minutes(i), i as u32))
            .collect();

        assert_eq!(series.latest().map(|s| s.value), Some(2));
        assert_eq!(series.previous().map(|s| s.value), Some(1));

        let single = SampleSeries::new(vec![Sample::new(noon(), 7u32)]);
        assert!(single.previous().is_none());
    }
}
