use crate::repository::Repositories;
use crate::service::authentication_service::AuthenticationService;
use crate::service::token_service::TokenService;
use crate::service::user_service::UserService;

#[derive(Clone)]
pub struct AuthState {
    pub(crate) authentication_service: AuthenticationService,
    pub(crate) user_service: UserService,
}

impl AuthState {
    pub fn new(repositories: &Repositories, token_service: TokenService, user_service: UserService) -> Self {
        Self {
            authentication_service: AuthenticationService::new(repositories, token_service),
            user_service,
        }
    }
}
