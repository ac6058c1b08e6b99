// Domain layer - Plain data produced by the vest simulation
pub mod alert;
pub mod buckets;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod series;
pub mod telemetry;
pub mod vest;
