use crate::dto::group_dto::{GroupDto, GroupRequestDto};
use crate::error::AppError;
use crate::error::request_error::{PathParam, ValidatedRequest};
use crate::handler::{delete_response, list_response};
use crate::response::app_response::SuccessResponse;
use crate::service::group_service::group_not_found;
use crate::state::group_state::GroupState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

pub async fn list_groups(State(state): State<GroupState>) -> Result<Response, AppError> {
    let groups = state.group_service.list_groups().await?;
    Ok(list_response("List of groups successfully returned", groups))
}

pub async fn get_group(
    State(state): State<GroupState>,
    PathParam(id): PathParam<i64>,
) -> Result<SuccessResponse<GroupDto>, AppError> {
    let group = state.group_service.get_group(id).await?;
    Ok(SuccessResponse::send("Group found", group))
}

pub async fn create_group(
    State(state): State<GroupState>,
    ValidatedRequest(payload): ValidatedRequest<GroupRequestDto>,
) -> Result<SuccessResponse<GroupDto>, AppError> {
    let group = state.group_service.create_group(payload).await?;
    Ok(SuccessResponse::send("Group successfully created", group).with_status(StatusCode::CREATED))
}

pub async fn update_group(
    State(state): State<GroupState>,
    PathParam(id): PathParam<i64>,
    ValidatedRequest(payload): ValidatedRequest<GroupRequestDto>,
) -> Result<SuccessResponse<GroupDto>, AppError> {
    let group = state.group_service.update_group(id, payload).await?;
    Ok(SuccessResponse::send("Group successfully updated", group))
}

pub async fn delete_group(
    State(state): State<GroupState>,
    PathParam(id): PathParam<i64>,
) -> Result<Response, AppError> {
    let deleted = state.group_service.delete_group(id).await?;
    delete_response(deleted, || group_not_found(id))
}
