// Domain errors
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested window or history length cannot be sampled.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unknown metric '{0}'")]
    UnknownMetric(String),
}

impl GenerationError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
