use crate::config::logging::secure_log;
use crate::config::parameter;
use crate::dto::user_dto::{UserReadDto, UserRegisterDto};
use crate::entity::role::RoleKind;
use crate::entity::status::AccountStatus;
use crate::entity::user::{NewUser, User};
use crate::error::AppError;
use crate::error::user_error::UserError;
use crate::repository::Repositories;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::password;
use crate::service::role_service::RoleService;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepositoryTrait>,
    role_service: RoleService,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repositories: &Repositories) -> Self {
        Self::with_bcrypt_cost(repositories, parameter::get_u64("BCRYPT_COST") as u32)
    }

    pub fn with_bcrypt_cost(repositories: &Repositories, bcrypt_cost: u32) -> Self {
        Self {
            user_repo: Arc::clone(&repositories.users),
            role_service: RoleService::new(repositories),
            bcrypt_cost,
        }
    }

    pub async fn create_user(&self, payload: UserRegisterDto) -> Result<UserReadDto, AppError> {
        if self
            .user_repo
            .exists_by_username_or_email(&payload.username, &payload.email)
            .await?
        {
            secure_log::sensitive_debug!("Registration rejected, username or email taken: {}", payload.username);
            return Err(UserError::AlreadyRegistered.into());
        }

        let role = self.role_service.find_by_role(RoleKind::User).await?;
        let password_hash = password::hash_password(payload.password, self.bcrypt_cost).await?;

        let user = self
            .user_repo
            .insert(&NewUser {
                name: payload.name,
                email: payload.email,
                username: payload.username,
                password_hash,
                status: AccountStatus::Active,
                role_id: role.id,
            })
            .await?;

        info!("SECURITY: New user registered with ID: {}", user.id);
        Ok(UserReadDto::from(user))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_username(username).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserReadDto>, AppError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserReadDto::from).collect())
    }

    pub async fn delete_user(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.user_repo.delete(id).await?;
        if deleted {
            info!("SECURITY: User {} deleted", id);
        }
        Ok(deleted)
    }
}
