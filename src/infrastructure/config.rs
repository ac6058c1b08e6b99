use crate::application::alerts::AlertRules;
use crate::application::history_service::MAX_HISTORY_DAYS;
use crate::domain::series::SampleWindow;
use crate::domain::vest::SignalQuality;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub vest: VestSettings,
    pub generation: GenerationSettings,
    pub alerts: AlertRules,
    pub history: HistorySettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VestSettings {
    pub wearer: String,
    pub battery_percent: u8,
    pub signal: SignalQuality,
}

impl Default for VestSettings {
    fn default() -> Self {
        Self {
            wearer: "Jean Dupont".to_string(),
            battery_percent: 78,
            signal: SignalQuality::Good,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationSettings {
    pub duration_hours: i64,
    pub interval_minutes: i64,
    pub max_chart_points: usize,
    /// Fixed seed for reproducible demos; unset draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            duration_hours: 12,
            interval_minutes: 5,
            max_chart_points: 150,
            seed: None,
        }
    }
}

impl GenerationSettings {
    pub fn window(&self) -> Result<SampleWindow, crate::domain::error::GenerationError> {
        SampleWindow::from_hours(self.duration_hours, self.interval_minutes)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct HistorySettings {
    pub days: u32,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { days: 7 }
    }
}

/// Load `config/vest.toml` (optional) overlaid with `VEST__SECTION__KEY` variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/vest").required(false))
        .add_source(
            config::Environment::with_prefix("VEST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    validate(&app_config)?;
    Ok(app_config)
}

fn validate(app_config: &AppConfig) -> anyhow::Result<()> {
    app_config.generation.window()?;

    let probability = app_config.alerts.fall_probability;
    if !(0.0..=1.0).contains(&probability) {
        anyhow::bail!("alerts.fall_probability must be within [0, 1], got {}", probability);
    }
    if app_config.generation.max_chart_points == 0 {
        anyhow::bail!("generation.max_chart_points must be positive");
    }
    if !(1..=MAX_HISTORY_DAYS).contains(&app_config.history.days) {
        anyhow::bail!(
            "history.days must be within 1..={}, got {}",
            MAX_HISTORY_DAYS,
            app_config.history.days
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let app_config = parse("");

        assert_eq!(app_config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(app_config.vest.wearer, "Jean Dupont");
        assert_eq!(app_config.generation, GenerationSettings::default());
        assert_eq!(app_config.alerts, AlertRules::default());
        assert_eq!(app_config.history.days, 7);
        assert!(validate(&app_config).is_ok());
    }

    #[test]
    fn test_partial_sections_override() {
        let app_config = parse(
            r#"
            [vest]
            wearer = "Marie Dupont"
            signal = "weak"

            [generation]
            duration_hours = 6
            seed = 42

            [alerts]
            heart_rate_threshold = 120

            [alerts.notifications]
            posture = false
            "#,
        );

        assert_eq!(app_config.vest.wearer, "Marie Dupont");
        assert_eq!(app_config.vest.signal, SignalQuality::Weak);
        assert_eq!(app_config.vest.battery_percent, 78);
        assert_eq!(app_config.generation.duration_hours, 6);
        assert_eq!(app_config.generation.interval_minutes, 5);
        assert_eq!(app_config.generation.seed, Some(42));
        assert_eq!(app_config.alerts.heart_rate_threshold, 120);
        assert_eq!(app_config.alerts.temperature_threshold, 37.5);
        assert!(!app_config.alerts.notifications.posture);
        assert!(app_config.alerts.notifications.fall);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_interval = parse("[generation]\ninterval_minutes = 0");
        assert!(validate(&bad_interval).is_err());

        let bad_probability = parse("[alerts]\nfall_probability = 1.5");
        assert!(validate(&bad_probability).is_err());

        let no_history = parse("[history]\ndays = 0");
        assert!(validate(&no_history).is_err());

        let long_history = parse("[history]\ndays = 500");
        assert!(validate(&long_history).is_err());

        let full_quarter = parse("[history]\ndays = 90");
        assert!(validate(&full_quarter).is_ok());
    }
}
