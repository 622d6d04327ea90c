use crate::service::token_service::TokenService;
use crate::service::user_service::UserService;

#[derive(Clone)]
pub struct TokenState {
    pub token_service: TokenService,
    pub user_service: UserService,
}

impl TokenState {
    pub fn new(token_service: TokenService, user_service: UserService) -> Self {
        Self {
            token_service,
            user_service,
        }
    }
}
