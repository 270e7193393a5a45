pub mod events;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chosei_core::ChoseiError;
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert chosei errors to HTTP responses.
///
/// Validation problems are the caller's to fix, a missing event is a
/// not-found page state, everything else is a server fault.
pub struct AppError(ChoseiError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ChoseiError::Validation(_) => StatusCode::BAD_REQUEST,
            ChoseiError::EventNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<ChoseiError> for AppError {
    fn from(err: ChoseiError) -> Self {
        Self(err)
    }
}
