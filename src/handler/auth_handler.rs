use crate::dto::token_dto::TokenReadDto;
use crate::dto::user_dto::{UserLoginDto, UserReadDto, UserRegisterDto};
use crate::error::{AppError, request_error::ValidatedRequest};
use crate::response::app_response::SuccessResponse;
use crate::state::auth_state::AuthState;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

pub async fn sign_up(
    State(state): State<AuthState>,
    ValidatedRequest(payload): ValidatedRequest<UserRegisterDto>,
) -> Result<SuccessResponse<UserReadDto>, AppError> {
    info!("Registration attempt for username: {}", payload.username);

    let user = state.user_service.create_user(payload).await?;
    Ok(SuccessResponse::send("User successfully created", user).with_status(StatusCode::CREATED))
}

pub async fn sign_in(
    State(state): State<AuthState>,
    ValidatedRequest(payload): ValidatedRequest<UserLoginDto>,
) -> Result<SuccessResponse<TokenReadDto>, AppError> {
    info!("Sign-in attempt for username: {}", payload.username);

    let token = state.authentication_service.authenticate(payload).await?;
    Ok(SuccessResponse::send("Successfully signed in", token))
}

/// Tokens are not stored server-side, so there is nothing to revoke.
pub async fn sign_out() -> SuccessResponse<()> {
    SuccessResponse::send("Successfully signed out", ())
}
