use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User already registered")]
    AlreadyRegistered,
    #[error("{0}")]
    AuthenticationFailed(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User account is locked")]
    AccountLocked,
    #[error("User account has expired")]
    AccountExpired,
    #[error("User credentials have expired")]
    CredentialsExpired,
    #[error("User is disabled")]
    AccountDisabled,
    #[error("Invalid role: {0}")]
    InvalidRole(String),
}
