use crate::dto::animal_dto::{AnimalDto, AnimalPatchDto, AnimalRequestDto};
use crate::error::AppError;
use crate::error::request_error::{PathParam, ValidatedRequest};
use crate::handler::{delete_response, list_response};
use crate::response::app_response::SuccessResponse;
use crate::state::animal_state::AnimalState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

pub async fn list_animals(State(state): State<AnimalState>) -> Result<Response, AppError> {
    let animals = state.animal_service.list_animals().await?;
    Ok(list_response("Animals found successfully", animals))
}

pub async fn get_animal(
    State(state): State<AnimalState>,
    PathParam(id): PathParam<i64>,
) -> Result<SuccessResponse<AnimalDto>, AppError> {
    let animal = state.animal_service.get_animal(id).await?;
    Ok(SuccessResponse::send("Animal found successfully", animal))
}

pub async fn get_animals_by_group(
    State(state): State<AnimalState>,
    PathParam(group): PathParam<String>,
) -> Result<SuccessResponse<Vec<AnimalDto>>, AppError> {
    let animals = state.animal_service.get_animals_by_group(&group).await?;
    Ok(SuccessResponse::send("Animals found in the group", animals))
}

pub async fn create_animal(
    State(state): State<AnimalState>,
    ValidatedRequest(payload): ValidatedRequest<AnimalRequestDto>,
) -> Result<SuccessResponse<AnimalDto>, AppError> {
    let animal = state.animal_service.create_animal(payload).await?;
    Ok(SuccessResponse::send("Animal created successfully", animal).with_status(StatusCode::CREATED))
}

pub async fn update_animal(
    State(state): State<AnimalState>,
    PathParam(id): PathParam<i64>,
    ValidatedRequest(payload): ValidatedRequest<AnimalRequestDto>,
) -> Result<SuccessResponse<AnimalDto>, AppError> {
    let animal = state.animal_service.update_animal(id, payload).await?;
    Ok(SuccessResponse::send("Animal updated successfully", animal))
}

pub async fn patch_animal(
    State(state): State<AnimalState>,
    PathParam(id): PathParam<i64>,
    ValidatedRequest(payload): ValidatedRequest<AnimalPatchDto>,
) -> Result<SuccessResponse<AnimalDto>, AppError> {
    let animal = state.animal_service.patch_animal(id, payload).await?;
    Ok(SuccessResponse::send("Animal partially updated successfully", animal))
}

pub async fn delete_animal(
    State(state): State<AnimalState>,
    PathParam(id): PathParam<i64>,
) -> Result<Response, AppError> {
    let deleted = state.animal_service.delete_animal(id).await?;
    delete_response(deleted, || AppError::not_found(format!("Animal not found with id {}", id)))
}
