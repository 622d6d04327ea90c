use crate::entity::principal::Principal;
use crate::error::{AppError, token_error::TokenError, user_error::UserError};
use crate::service::token_service::TokenServiceTrait;
use crate::state::token_state::TokenState;
use axum::extract::State;
use axum::response::Response;
use axum::{http, http::Request, middleware::Next};
use tracing::{info, warn};
use crate::config::logging::secure_log;

/// Paths served without a bearer token. A trailing `/**` matches the prefix
/// itself and everything beneath it.
pub const PUBLIC_PATHS: &[&str] = &[
    "/v1/public/**",
    "/v1/auth/sign-up",
    "/v1/auth/sign-in",
    "/v1/auth/sign-out",
    "/v2/api-docs",
    "/v3/api-docs",
    "/v3/api-docs/**",
    "/swagger-resources",
    "/swagger-resources/**",
    "/swagger-ui/**",
    "/swagger-ui.html",
    "/configuration/ui",
    "/configuration/security",
    "/webjars/**",
];

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|pattern| match pattern.strip_suffix("/**") {
        Some(prefix) => {
            path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
        }
        None => path == *pattern,
    })
}

fn bearer_token<B>(req: &Request<B>) -> Result<String, TokenError> {
    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(TokenError::InvalidHeader)
}

pub async fn auth(
    State(state): State<TokenState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    if is_public(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let token = bearer_token(&req).inspect_err(|_| {
        warn!("SECURITY: Missing or malformed authorization header for {}", req.uri().path());
    })?;

    let claims = state.token_service.validate_token(&token).inspect_err(|e| {
        warn!("SECURITY: Rejected JWT token: {}", e);
    })?;

    let user = state
        .user_service
        .find_by_username(&claims.sub)
        .await?
        .ok_or_else(|| {
            secure_log::sensitive_debug!("Token subject no longer exists: {}", claims.sub);
            UserError::AuthenticationFailed("User not found for the provided token".to_string())
        })?;

    info!("SECURITY: Request authenticated for user ID: {}", user.id);
    req.extensions_mut().insert(Principal::from(&user));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_matching() {
        assert!(is_public("/v1/auth/sign-in"));
        assert!(is_public("/v1/public"));
        assert!(is_public("/v1/public/health"));
        assert!(is_public("/v3/api-docs/swagger-config"));
        assert!(is_public("/swagger-ui/index.html"));

        assert!(!is_public("/v1/auth/sign-in/extra"));
        assert!(!is_public("/v1/publicity"));
        assert!(!is_public("/v1/animals"));
        assert!(!is_public("/swagger-resources-x"));
    }

    #[test]
    fn test_bearer_token_extraction() {
        let request = |value: Option<&str>| {
            let mut builder = Request::builder().uri("/v1/animals");
            if let Some(value) = value {
                builder = builder.header(http::header::AUTHORIZATION, value);
            }
            builder.body(()).unwrap()
        };

        assert_eq!(bearer_token(&request(Some("Bearer abc.def.ghi"))).unwrap(), "abc.def.ghi");
        assert!(matches!(bearer_token(&request(None)), Err(TokenError::InvalidHeader)));
        assert!(matches!(bearer_token(&request(Some("Basic abc"))), Err(TokenError::InvalidHeader)));
        assert!(matches!(bearer_token(&request(Some("Bearer    "))), Err(TokenError::InvalidHeader)));
    }
}
