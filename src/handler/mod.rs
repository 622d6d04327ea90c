pub(crate) mod animal_handler;
pub(crate) mod auth_handler;
pub(crate) mod fallback_handler;
pub(crate) mod group_handler;
pub(crate) mod health_handler;
pub(crate) mod user_handler;

use crate::response::app_response::SuccessResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Collections answer 204 without a body when empty.
pub(crate) fn list_response<T: Serialize>(message: &str, items: Vec<T>) -> Response {
    if items.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    SuccessResponse::send(message, items).into_response()
}

/// Deletions answer 204 without a body, or NotFound when nothing was removed.
pub(crate) fn delete_response(deleted: bool, not_found: impl FnOnce() -> crate::error::AppError) -> Result<Response, crate::error::AppError> {
    if deleted {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(not_found())
    }
}
