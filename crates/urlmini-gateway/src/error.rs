use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};
use urlmini_core::ShortenerError;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error("no mapping for '{0}'")]
    NotFound(String),
    #[error("invalid request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Shortener(ShortenerError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            AppError::Shortener(ShortenerError::GenerationExhausted { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Shortener(ShortenerError::StoreUnavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Shortener(ShortenerError::StoreUnavailable(source)) => {
                error!(error = %source, "store failure");
                "internal server error".to_string()
            }
            AppError::Shortener(ShortenerError::GenerationExhausted { .. }) => {
                warn!(error = %self, "minify exhausted its attempts");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
