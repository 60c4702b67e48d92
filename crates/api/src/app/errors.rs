use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use partdash_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound(key) => {
            tracing::warn!(key = %key, "lookup for unknown part");
            json_error(StatusCode::NOT_FOUND, "not_found", format!("part {key} not found"))
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Validation(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "validation_error", msg)
        }
        DomainError::Conflict(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "conflict", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
