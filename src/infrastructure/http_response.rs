// HTTP error responses for rejected requests
use crate::domain::error::GenerationError;
use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Generation(GenerationError),
    /// Query string that does not deserialize into the expected parameters.
    MalformedQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Generation(GenerationError::InvalidConfiguration(_)) => StatusCode::BAD_REQUEST,
            ApiError::Generation(GenerationError::UnknownMetric(_)) => StatusCode::NOT_FOUND,
            ApiError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Generation(err) => err.to_string(),
            ApiError::MalformedQuery(reason) => format!("invalid query: {}", reason),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        ApiError::Generation(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        tracing::warn!("Rejected request ({}): {}", status, message);

        (status, Json(json!({ "error": message }))).into_response()
    }
}
