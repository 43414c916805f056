use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use foodlens_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every core error that reaches a handler is a server-side failure.
impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_are_server_errors() {
        for error in [
            CoreError::InternalServerError,
            CoreError::InvalidImage("bad bytes".to_string()),
            CoreError::UnexpectedStatus(503),
        ] {
            let message = error.to_string();
            let api_error = ApiError::from(error);

            assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_error, ApiError::InternalServerError(message));
        }
    }

    #[test]
    fn bad_requests_map_to_400() {
        assert_eq!(
            ApiError::BadRequest("Immagine mancante".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
