use crate::error::AppError;
use crate::error::request_error::PathParam;
use crate::handler::{delete_response, list_response};
use crate::state::user_state::UserState;
use axum::extract::State;
use axum::response::Response;

pub async fn list_users(State(state): State<UserState>) -> Result<Response, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(list_response("Users found successfully", users))
}

pub async fn delete_user(
    State(state): State<UserState>,
    PathParam(id): PathParam<i64>,
) -> Result<Response, AppError> {
    let deleted = state.user_service.delete_user(id).await?;
    delete_response(deleted, || AppError::not_found(format!("User not found with id {}", id)))
}
