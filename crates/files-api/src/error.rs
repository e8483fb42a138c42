//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use files_core::error::{AppError, ErrorKind};

use crate::dto::response::ErrorBody;

/// An [`AppError`] on its way out as an HTTP response.
///
/// Caller mistakes keep their message; infrastructure failures are logged
/// and reported as a bare 500.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        if self.0.kind.is_infrastructure() {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            );
        }

        match self.0.kind {
            ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            _ => (StatusCode::BAD_REQUEST, self.0.message.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(
                kind = %self.0.kind,
                error = %self.0,
                source = ?std::error::Error::source(&self.0),
                "Request failed"
            );
        }

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
