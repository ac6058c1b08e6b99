// Alert derivation over one render cycle
use crate::domain::alert::{Alert, AlertKind};
use crate::domain::series::{Posture, SampleSeries};
use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const POSTURE_ADVICE: &str = "correction recommended";
pub const FALL_ADVICE: &str = "intervention recommended";

/// Which alert rules run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifications {
    pub heart_rate: bool,
    pub temperature: bool,
    pub posture: bool,
    pub fall: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            heart_rate: true,
            temperature: true,
            posture: true,
            fall: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertRules {
    /// Samples strictly above this BPM raise a warning.
    pub heart_rate_threshold: u32,
    /// Samples strictly above this °C raise a danger alert.
    pub temperature_threshold: f64,
    /// Chance of one synthetic fall per cycle.
    pub fall_probability: f64,
    /// How many alerts the dashboard shows.
    pub recent_limit: usize,
    pub notifications: Notifications,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self {
            heart_rate_threshold: 100,
            temperature_threshold: 37.5,
            fall_probability: 0.3,
            recent_limit: 5,
            notifications: Notifications::default(),
        }
    }
}

/// Alerts from the three series plus the fall coin flip, most recent first.
pub fn derive_alerts<R: Rng + ?Sized>(
    rules: &AlertRules,
    heart_rate: &SampleSeries<u32>,
    temperature: &SampleSeries<f64>,
    posture: &SampleSeries<Posture>,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if rules.notifications.heart_rate {
        alerts.extend(
            heart_rate
                .iter()
                .filter(|s| s.value > rules.heart_rate_threshold)
                .map(|s| Alert::new(s.timestamp, AlertKind::ElevatedHeartRate, format!("{} BPM", s.value))),
        );
    }

    if rules.notifications.temperature {
        alerts.extend(
            temperature
                .iter()
                .filter(|s| s.value > rules.temperature_threshold)
                .map(|s| Alert::new(s.timestamp, AlertKind::ElevatedTemperature, format!("{:.1}°C", s.value))),
        );
    }

    if rules.notifications.posture {
        alerts.extend(
            posture
                .iter()
                .filter(|s| s.value == Posture::BadPosture)
                .map(|s| Alert::new(s.timestamp, AlertKind::PoorPosture, POSTURE_ADVICE.to_string())),
        );
    }

    if rules.notifications.fall && rng.gen_bool(rules.fall_probability.clamp(0.0, 1.0)) {
        let hours_ago = rng.gen_range(1..=8);
        alerts.push(Alert::new(
            now - TimeDelta::hours(hours_ago),
            AlertKind::FallDetected,
            FALL_ADVICE.to_string(),
        ));
    }

    alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    tracing::debug!("Derived {} alerts", alerts.len());
    alerts
}
