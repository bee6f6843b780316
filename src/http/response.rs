//! Error rendering for HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::product_actor::ProductError;

#[must_use]
pub fn error_status(err: &ProductError) -> StatusCode {
    match err {
        ProductError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ProductError::ActorCommunicationError(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        warn!(status = status.as_u16(), error = %self, "Request failed");
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
