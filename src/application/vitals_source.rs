// Source of vest readings for one render cycle
use crate::domain::alert::Alert;
use crate::domain::error::GenerationError;
use crate::domain::series::{
    ActivityReading, GeneratedSeries, MetricKind, Posture, SampleSeries, SampleWindow,
};
use chrono::NaiveDateTime;

/// Everything the dashboard shows for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalsSnapshot {
    pub captured_at: NaiveDateTime,
    pub window: SampleWindow,
    pub heart_rate: SampleSeries<u32>,
    pub temperature: SampleSeries<f64>,
    pub activity: SampleSeries<ActivityReading>,
    pub posture: SampleSeries<Posture>,
    pub alerts: Vec<Alert>,
}

pub trait VitalsSource: Send + Sync {
    /// Capture all four series and their alerts. `seed` pins the random draws.
    fn capture(
        &self,
        window: SampleWindow,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<VitalsSnapshot, GenerationError>;

    /// A single series on its own.
    fn series(
        &self,
        kind: MetricKind,
        window: SampleWindow,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<GeneratedSeries, GenerationError>;
}
