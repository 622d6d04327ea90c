use crate::entity::role::{Role, RoleKind};
use crate::error::AppError;
use crate::repository::Repositories;
use crate::repository::role_repository::RoleRepositoryTrait;
use std::sync::Arc;

#[derive(Clone)]
pub struct RoleService {
    role_repo: Arc<dyn RoleRepositoryTrait>,
}

impl RoleService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            role_repo: Arc::clone(&repositories.roles),
        }
    }

    pub async fn find_by_role(&self, role: RoleKind) -> Result<Role, AppError> {
        self.role_repo
            .find_by_role(role)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Role not found: {}", role)))
    }
}
