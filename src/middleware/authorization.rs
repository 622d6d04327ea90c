use crate::entity::principal::Principal;
use crate::error::AppError;
use crate::error::authorization_error::AuthorizationError;
use axum::response::Response;
use axum::{http::Request, middleware::Next};
use crate::config::logging::secure_log;
use tracing::{info, warn};

pub const ADMINISTRATOR_AUTHORITY: &str = "ROLE_ADMINISTRATOR";

/// Only principals holding `ROLE_ADMINISTRATOR` get past this layer.
pub async fn require_administrator(
    req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let principal = req.extensions().get::<Principal>().cloned();

    match principal {
        Some(principal) if principal.has_authority(ADMINISTRATOR_AUTHORITY) => {
            info!("Authorization granted for user ID: {}", principal.id);
            secure_log::sensitive_debug!("Administrator access by {}", principal.username);
            Ok(next.run(req).await)
        }
        Some(principal) => {
            warn!("SECURITY: Access denied for user ID: {} on {}", principal.id, req.uri().path());
            Err(AuthorizationError::AccessDenied {
                message: "Administrator role required".to_string(),
            }
            .into())
        }
        None => Err(AuthorizationError::AccessDenied {
            message: "No authenticated principal".to_string(),
        }
        .into()),
    }
}
