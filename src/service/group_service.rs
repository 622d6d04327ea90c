use crate::config::logging::secure_log;
use crate::dto::group_dto::{GroupDto, GroupRequestDto};
use crate::error::AppError;
use crate::error::resource_error::ResourceError;
use crate::repository::Repositories;
use crate::repository::group_repository::GroupRepositoryTrait;
use std::sync::Arc;

#[derive(Clone)]
pub struct GroupService {
    group_repo: Arc<dyn GroupRepositoryTrait>,
}

impl GroupService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            group_repo: Arc::clone(&repositories.groups),
        }
    }

    pub async fn list_groups(&self) -> Result<Vec<GroupDto>, AppError> {
        let groups = self.group_repo.find_all().await?;
        Ok(groups.into_iter().map(GroupDto::from).collect())
    }

    pub async fn get_group(&self, id: i64) -> Result<GroupDto, AppError> {
        self.group_repo
            .find(id)
            .await?
            .map(GroupDto::from)
            .ok_or_else(|| group_not_found(id))
    }

    pub async fn create_group(&self, payload: GroupRequestDto) -> Result<GroupDto, AppError> {
        let group = self.group_repo.insert(payload.name()).await?;
        secure_log::sensitive_debug!("Group created: {} ({})", group.name, group.id);
        Ok(group.into())
    }

    pub async fn update_group(&self, id: i64, payload: GroupRequestDto) -> Result<GroupDto, AppError> {
        self.group_repo
            .update(id, payload.name())
            .await?
            .map(GroupDto::from)
            .ok_or_else(|| group_not_found(id))
    }

    /// `false` when no group has this id.
    pub async fn delete_group(&self, id: i64) -> Result<bool, AppError> {
        self.group_repo.delete(id).await
    }
}

pub(crate) fn group_not_found(id: i64) -> AppError {
    ResourceError::group_not_found(id).into()
}
