use crate::service::user_service::UserService;

#[derive(Clone)]
pub struct UserState {
    pub user_service: UserService,
}

impl UserState {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }
}
