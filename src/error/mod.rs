pub(crate) mod authorization_error;
pub(crate) mod db_error;
pub(crate) mod request_error;
pub(crate) mod resource_error;
pub(crate) mod token_error;
pub(crate) mod user_error;

use crate::config::logging::secure_log;
use crate::response::app_response::{ErrorDetail, ErrorResponse};
use authorization_error::AuthorizationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db_error::DbError;
use request_error::RequestError;
use resource_error::ResourceError;
use token_error::TokenError;
use tracing::warn;
use user_error::UserError;

// Unified application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("Request method is not supported for this resource")]
    MethodNotAllowed,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        AppError::Db(DbError::from(error))
    }
}

/// What the client is told about a failure.
#[derive(Debug, PartialEq)]
pub struct ErrorDescription {
    pub status: StatusCode,
    pub error: String,
    pub message: String,
    pub details: Vec<ErrorDetail>,
}

impl ErrorDescription {
    fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.to_string(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    fn with_details(mut self, details: Vec<ErrorDetail>) -> Self {
        self.details = details;
        self
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An unexpected error occurred",
        )
    }
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::Resource(ResourceError::not_found(message))
    }

    /// Translate the failure into status, reason phrase, message and sub-errors.
    pub fn describe(&self) -> ErrorDescription {
        match self {
            AppError::Resource(ResourceError::NotFound(message)) => {
                ErrorDescription::new(StatusCode::NOT_FOUND, "Not Found", message.clone()).with_details(vec![
                    ErrorDetail::new("resource", "The requested resource could not be found."),
                ])
            }
            AppError::User(error) => describe_user_error(error),
            AppError::Token(error) => describe_token_error(error),
            AppError::Authorization(AuthorizationError::AccessDenied { message }) => ErrorDescription::new(
                StatusCode::FORBIDDEN,
                "Unauthorized - You are not authorized to access this resource",
                message.clone(),
            ),
            AppError::Request(error) => error.describe(),
            AppError::Db(DbError::DataIntegrity(message)) => {
                ErrorDescription::new(StatusCode::CONFLICT, "Conflict", message.clone())
            }
            AppError::MethodNotAllowed => {
                ErrorDescription::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed", self.to_string())
            }
            AppError::Db(DbError::SomethingWentWrong(_)) | AppError::Config(_) | AppError::Internal(_) => {
                ErrorDescription::internal()
            }
        }
    }
}

fn describe_user_error(error: &UserError) -> ErrorDescription {
    let message = error.to_string();
    match error {
        UserError::AlreadyRegistered => {
            ErrorDescription::new(StatusCode::CONFLICT, "Resource Already Registered", message)
        }
        UserError::AuthenticationFailed(_) => {
            ErrorDescription::new(StatusCode::UNAUTHORIZED, "Unauthorized - Authentication failed", message)
        }
        UserError::InvalidCredentials => {
            ErrorDescription::new(StatusCode::UNAUTHORIZED, "Unauthorized - Invalid credentials", message)
        }
        UserError::AccountLocked => {
            ErrorDescription::new(StatusCode::FORBIDDEN, "Unauthorized - The account is locked", message)
        }
        UserError::AccountExpired => {
            ErrorDescription::new(StatusCode::FORBIDDEN, "Unauthorized - The account has expired", message)
        }
        UserError::CredentialsExpired => {
            ErrorDescription::new(StatusCode::FORBIDDEN, "Unauthorized - The credentials have expired", message)
        }
        UserError::AccountDisabled => {
            ErrorDescription::new(StatusCode::FORBIDDEN, "Unauthorized - The account is disabled", message)
        }
        UserError::InvalidRole(_) => ErrorDescription::new(StatusCode::BAD_REQUEST, "Role invalid", message),
    }
}

fn describe_token_error(error: &TokenError) -> ErrorDescription {
    let message = error.to_string();
    match error {
        TokenError::InvalidHeader => {
            ErrorDescription::new(StatusCode::FORBIDDEN, "Unauthorized - Header Invalid", message)
        }
        TokenError::InvalidToken => {
            ErrorDescription::new(StatusCode::FORBIDDEN, "Unauthorized - The JWT token is invalid", message)
        }
        TokenError::ExpiredToken => {
            ErrorDescription::new(StatusCode::FORBIDDEN, "Unauthorized - The JWT token has expired", message)
        }
        TokenError::TokenCreationError(_) => ErrorDescription::internal(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let description = self.describe();

        if description.status.is_server_error() {
            secure_log::secure_error!("Request failed with internal error", self);
        } else {
            warn!("Request rejected: {} ({})", description.error, description.status);
        }

        ErrorResponse::new(description.status, description.error, description.message)
            .with_details(description.details)
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        error.describe().status
    }

    #[test]
    fn test_not_found_carries_resource_detail() {
        let description = AppError::not_found("Animal not found with id 42").describe();

        assert_eq!(description.status, StatusCode::NOT_FOUND);
        assert_eq!(description.error, "Not Found");
        assert_eq!(description.message, "Animal not found with id 42");
        assert_eq!(description.details.len(), 1);
        assert_eq!(description.details[0].field, "resource");
    }

    #[test]
    fn test_authentication_failures_map_to_distinct_reasons() {
        let wrong_password = AppError::from(UserError::InvalidCredentials).describe();
        let locked = AppError::from(UserError::AccountLocked).describe();

        assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
        assert_eq!(locked.status, StatusCode::FORBIDDEN);
        assert_ne!(wrong_password.error, locked.error);
    }

    #[test]
    fn test_status_table() {
        assert_eq!(status_of(UserError::AlreadyRegistered.into()), StatusCode::CONFLICT);
        assert_eq!(status_of(UserError::AuthenticationFailed("gone".into()).into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(UserError::InvalidRole("ROOT".into()).into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(UserError::AccountExpired.into()), StatusCode::FORBIDDEN);
        assert_eq!(status_of(UserError::CredentialsExpired.into()), StatusCode::FORBIDDEN);
        assert_eq!(status_of(UserError::AccountDisabled.into()), StatusCode::FORBIDDEN);
        assert_eq!(status_of(TokenError::InvalidHeader.into()), StatusCode::FORBIDDEN);
        assert_eq!(status_of(TokenError::InvalidToken.into()), StatusCode::FORBIDDEN);
        assert_eq!(status_of(TokenError::ExpiredToken.into()), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(AuthorizationError::AccessDenied { message: "no".into() }.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(status_of(DbError::DataIntegrity("dup".into()).into()), StatusCode::CONFLICT);
        assert_eq!(status_of(AppError::MethodNotAllowed), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_token_kinds_have_distinct_reasons() {
        let header = AppError::from(TokenError::InvalidHeader).describe().error;
        let invalid = AppError::from(TokenError::InvalidToken).describe().error;
        let expired = AppError::from(TokenError::ExpiredToken).describe().error;

        assert_ne!(header, invalid);
        assert_ne!(invalid, expired);
        assert_ne!(header, expired);
    }

    #[test]
    fn test_internal_failures_hide_their_cause() {
        let description = AppError::Db(DbError::SomethingWentWrong(
            "connection refused at 10.0.0.3:5432".to_string(),
        ))
        .describe();

        assert_eq!(description.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(description.message, "An unexpected error occurred");
        assert!(description.details.is_empty());

        let description = AppError::from(TokenError::TokenCreationError("key rejected".into())).describe();
        assert_eq!(description.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!description.message.contains("key rejected"));
    }

    #[test]
    fn test_row_not_found_is_internal() {
        assert_eq!(status_of(sqlx::Error::RowNotFound.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
