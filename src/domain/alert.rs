// Alert domain model
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    ElevatedHeartRate,
    ElevatedTemperature,
    PoorPosture,
    FallDetected,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::ElevatedHeartRate => "elevated heart rate",
            AlertKind::ElevatedTemperature => "elevated temperature",
            AlertKind::PoorPosture => "poor posture detected",
            AlertKind::FallDetected => "fall detected",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AlertKind::ElevatedHeartRate => Severity::Warning,
            AlertKind::ElevatedTemperature | AlertKind::FallDetected => Severity::Danger,
            AlertKind::PoorPosture => Severity::Info,
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub timestamp: NaiveDateTime,
    pub kind: AlertKind,
    pub title: &'static str,
    pub value: String,
    pub severity: Severity,
}

impl Alert {
    pub fn new(timestamp: NaiveDateTime, kind: AlertKind, value: String) -> Self {
        Self {
            timestamp,
            kind,
            title: kind.label(),
            value,
            severity: kind.severity(),
        }
    }
}
