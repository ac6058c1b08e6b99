// Application layer - Generators, alert rules and use cases
pub mod alerts;
pub mod dashboard_service;
pub mod generator;
pub mod history_service;
pub mod vitals_source;
