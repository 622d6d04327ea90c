use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid Authorization Header")]
    InvalidHeader,
    #[error("Invalid Token")]
    InvalidToken,
    #[error("Token has expired")]
    ExpiredToken,
    #[error("Token error: {0}")]
    TokenCreationError(String),
}
