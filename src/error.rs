use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("listing {0} not found")]
    NotFound(i64),

    #[error("invalid listing: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("deleting listing {0} requires confirmation")]
    ConfirmationRequired(i64),

    #[error("Something went wrong: {0}")]
    Internal(color_eyre::eyre::Error),
}

impl From<color_eyre::eyre::Error> for AppError {
    fn from(err: color_eyre::eyre::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ConfirmationRequired(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Invalid(errors) => json!({ "error": self.to_string(), "fields": errors }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
