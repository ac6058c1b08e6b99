// Weekly history models
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyHeartRate {
    pub date: NaiveDate,
    pub min: u32,
    pub avg: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySteps {
    pub date: NaiveDate,
    pub steps: u32,
}

/// Per-day summaries, most recent day first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
    pub days: usize,
    pub heart_rate: Vec<DailyHeartRate>,
    pub steps: Vec<DailySteps>,
}
