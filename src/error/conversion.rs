/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, so handlers can
 * return `Result<_, ApiError>` and have failures rendered uniformly.
 *
 * # Response Format
 *
 * Every error becomes a JSON body with a single key:
 * ```json
 * {"error_message": "List does not exist"}
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref cause) = self {
            tracing::error!("Database error: {:?}", cause);
        }

        let status = self.status_code();
        let body = serde_json::json!({ "error_message": self.message() });

        (status, Json(body)).into_response()
    }
}
