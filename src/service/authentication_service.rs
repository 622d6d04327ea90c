use crate::dto::token_dto::TokenReadDto;
use crate::dto::user_dto::UserLoginDto;
use crate::entity::status::AccountStatus;
use crate::error::AppError;
use crate::error::user_error::UserError;
use crate::repository::Repositories;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::password;
use crate::service::token_service::{TokenService, TokenServiceTrait};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AuthenticationService {
    user_repo: Arc<dyn UserRepositoryTrait>,
    token_service: TokenService,
}

impl AuthenticationService {
    pub fn new(repositories: &Repositories, token_service: TokenService) -> Self {
        Self {
            user_repo: Arc::clone(&repositories.users),
            token_service,
        }
    }

    /// Check credentials, then the account status, then issue a token.
    pub async fn authenticate(&self, payload: UserLoginDto) -> Result<TokenReadDto, AppError> {
        let Some(user) = self.user_repo.find_by_username(&payload.username).await? else {
            warn!("SECURITY: Sign-in failed, unknown username");
            return Err(UserError::InvalidCredentials.into());
        };

        if !password::verify_password(payload.password, user.password.clone()).await? {
            warn!("SECURITY: Sign-in failed, wrong password for user ID: {}", user.id);
            return Err(UserError::InvalidCredentials.into());
        }

        let rejection = match user.status {
            AccountStatus::Active => None,
            AccountStatus::Blocked => Some(UserError::AccountLocked),
            AccountStatus::Expired => Some(UserError::AccountExpired),
            AccountStatus::CredentialsExpired => Some(UserError::CredentialsExpired),
            AccountStatus::Inactive => Some(UserError::AccountDisabled),
        };
        if let Some(error) = rejection {
            warn!("SECURITY: Sign-in refused for user ID: {} with status {}", user.id, user.status);
            return Err(error.into());
        }

        let token = self.token_service.generate_token(&user)?;
        info!("SECURITY: Successful authentication for user ID: {}", user.id);
        Ok(token)
    }
}
