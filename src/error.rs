use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A value the endpoint depends on was not injected into the environment.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), "Configuration error: {}", self);

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
