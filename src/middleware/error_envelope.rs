use crate::response::app_response::ErrorResponse;
use axum::response::{IntoResponse, Response};
use axum::{http::Request, middleware::Next};

/// Outermost layer: error bodies produced anywhere below get the request path.
pub async fn stamp_path(req: Request<axum::body::Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    match response.extensions_mut().remove::<ErrorResponse>() {
        Some(error) => error.with_path(path).into_response(),
        None => response,
    }
}
