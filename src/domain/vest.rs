// Vest device status shown next to the dashboard
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalQuality {
    Good,
    Weak,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VestStatus {
    pub wearer: String,
    pub battery_percent: u8,
    pub battery_level: BatteryLevel,
    pub signal: SignalQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryLevel {
    Full,
    Medium,
    Low,
    Critical,
}

impl VestStatus {
    pub fn new(wearer: &str, battery_percent: u8, signal: SignalQuality) -> Self {
        let battery_percent = battery_percent.min(100);
        Self {
            wearer: Self::format_wearer(wearer),
            battery_percent,
            battery_level: Self::battery_level(battery_percent),
            signal,
        }
    }

    fn format_wearer(name: &str) -> String {
        // Collapse "  Jean   Dupont " to "Jean Dupont"
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            "Unknown wearer".to_string()
        } else {
            name
        }
    }

    fn battery_level(percent: u8) -> BatteryLevel {
        match percent {
            75..=100 => BatteryLevel::Full,
            30..=74 => BatteryLevel::Medium,
            10..=29 => BatteryLevel::Low,
            _ => BatteryLevel::Critical,
        }
    }
}
