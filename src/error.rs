//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A lookup-by-key query returned zero rows. The message names the
    /// missing key, e.g. "No such company: apple".
    #[error("{0}")]
    NotFound(String),
    /// Anything the storage layer raises: constraint violations,
    /// connectivity failures. Propagated unmodified.
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Startup-only: bad DATABASE_URL, bind failures. Never raised on the
    /// request path.
    #[error("config: {0}")]
    Config(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                status: status.as_u16(),
            },
        };
        (status, Json(body)).into_response()
    }
}
