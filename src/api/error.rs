//! Transport mapping for the report error taxonomy.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;

use crate::report::SushiError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for SushiError {
    fn into_response(self) -> Response {
        let status = match &self {
            SushiError::MissingScopeContext => StatusCode::NOT_FOUND,
            SushiError::InvalidCustomerId
            | SushiError::InvalidDateRange
            | SushiError::InvalidCount => StatusCode::BAD_REQUEST,
            SushiError::InvalidPositionToken => StatusCode::FORBIDDEN,
            SushiError::Upstream(e) => {
                tracing::error!("upstream failure while building report: {e:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.code().to_string(),
            }),
        )
            .into_response()
    }
}
