// --- File: crates/bookly_common/src/http.rs ---
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::{BooklyError, HttpStatusCode};

/// Extension trait for BooklyError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for BooklyError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "success": false,
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for BooklyError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

// Axum rejects bodies and query strings it cannot parse with its own status
// codes; callers see them as plain InvalidInput instead.
impl From<JsonRejection> for BooklyError {
    fn from(rejection: JsonRejection) -> Self {
        BooklyError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for BooklyError {
    fn from(rejection: QueryRejection) -> Self {
        BooklyError::InvalidInput(rejection.body_text())
    }
}

/// Converts a `Result<T, BooklyError>` into a JSON handler result.
pub fn handle_json_result<T>(result: Result<T, BooklyError>) -> Result<Json<T>, Response>
where
    T: serde::Serialize,
{
    result.map(Json).map_err(|err| err.into_response())
}
