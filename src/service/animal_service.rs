use crate::config::logging::secure_log;
use crate::dto::animal_dto::{AnimalDto, AnimalPatchDto, AnimalRequestDto};
use crate::entity::animal::{Animal, AnimalChanges};
use crate::entity::status::AnimalStatus;
use crate::error::AppError;
use crate::repository::Repositories;
use crate::repository::animal_repository::AnimalRepositoryTrait;
use crate::repository::group_repository::GroupRepositoryTrait;
use crate::service::group_service::group_not_found;
use std::sync::Arc;

#[derive(Clone)]
pub struct AnimalService {
    animal_repo: Arc<dyn AnimalRepositoryTrait>,
    group_repo: Arc<dyn GroupRepositoryTrait>,
}

impl AnimalService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            animal_repo: Arc::clone(&repositories.animals),
            group_repo: Arc::clone(&repositories.groups),
        }
    }

    pub async fn list_animals(&self) -> Result<Vec<AnimalDto>, AppError> {
        Ok(to_dtos(self.animal_repo.find_all().await?))
    }

    pub async fn get_animal(&self, id: i64) -> Result<AnimalDto, AppError> {
        Ok(self.find_animal(id).await?.into())
    }

    /// `identifier` is a group id when it parses as one, a case-insensitive
    /// group name otherwise.
    pub async fn get_animals_by_group(&self, identifier: &str) -> Result<Vec<AnimalDto>, AppError> {
        let animals = match identifier.parse::<i64>() {
            Ok(id) => {
                let group = self.group_repo.find(id).await?.ok_or_else(|| group_not_found(id))?;
                self.animal_repo.find_by_group_id(group.id).await?
            }
            Err(_) => {
                let group = self
                    .group_repo
                    .find_by_name_ignore_case(identifier)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Group not found: {}", identifier)))?;
                self.animal_repo.find_by_group_name_ignore_case(&group.name).await?
            }
        };
        Ok(to_dtos(animals))
    }

    pub async fn create_animal(&self, payload: AnimalRequestDto) -> Result<AnimalDto, AppError> {
        let changes = changes_from(payload, AnimalStatus::Active)?;

        let animal = self.animal_repo.insert(&changes).await?;
        secure_log::sensitive_debug!("Animal created: {} ({})", animal.scientific_name, animal.id);
        Ok(animal.into())
    }

    /// Replace every field; status is kept when the payload omits it.
    pub async fn update_animal(&self, id: i64, payload: AnimalRequestDto) -> Result<AnimalDto, AppError> {
        let current = self.find_animal(id).await?;
        let status = payload.status.unwrap_or(current.status);
        let changes = changes_from(payload, status)?;

        self.animal_repo
            .update(id, &changes)
            .await?
            .map(AnimalDto::from)
            .ok_or_else(|| animal_not_found(id))
    }

    /// Only the scientific name and specie change.
    pub async fn patch_animal(&self, id: i64, payload: AnimalPatchDto) -> Result<AnimalDto, AppError> {
        let scientific_name = payload.scientific_name.unwrap_or_default();
        let specie = payload.specie.unwrap_or_default();

        self.animal_repo
            .rename(id, &scientific_name, &specie)
            .await?
            .map(AnimalDto::from)
            .ok_or_else(|| animal_not_found(id))
    }

    /// `false` when no animal has this id.
    pub async fn delete_animal(&self, id: i64) -> Result<bool, AppError> {
        self.animal_repo.delete(id).await
    }

    async fn find_animal(&self, id: i64) -> Result<Animal, AppError> {
        self.animal_repo.find(id).await?.ok_or_else(|| animal_not_found(id))
    }
}

fn animal_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Animal not found with id {}", id))
}

/// Validated payloads always carry the required fields. The store checks the
/// group inside the write transaction.
fn changes_from(payload: AnimalRequestDto, status: AnimalStatus) -> Result<AnimalChanges, AppError> {
    let group_id = payload
        .group
        .and_then(|group| group.id)
        .ok_or_else(|| AppError::Internal("animal payload without group id".to_string()))?;

    Ok(AnimalChanges {
        scientific_name: payload.scientific_name.unwrap_or_default(),
        specie: payload.specie.unwrap_or_default(),
        size: payload.size.unwrap_or_default(),
        mass: payload.mass.unwrap_or_default(),
        status,
        group_id,
    })
}

fn to_dtos(animals: Vec<Animal>) -> Vec<AnimalDto> {
    animals.into_iter().map(AnimalDto::from).collect()
}
