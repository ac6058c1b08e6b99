// Application state for HTTP handlers
use crate::application::alerts::AlertRules;
use crate::application::dashboard_service::DashboardService;
use crate::application::history_service::HistoryService;
use crate::infrastructure::config::{GenerationSettings, HistorySettings};

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub history_service: HistoryService,
    pub generation: GenerationSettings,
    pub history: HistorySettings,
    pub alert_rules: AlertRules,
}
