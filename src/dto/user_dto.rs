use crate::entity::status::AccountStatus;
use crate::entity::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UserRegisterDto {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(email(message = "Email format is invalid"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: String,
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UserLoginDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserReadDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub status: AccountStatus,
    pub roles: Vec<String>,
}

impl From<User> for UserReadDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            roles: user.roles.iter().map(|role| role.role.as_str().to_string()).collect(),
            name: user.name,
            email: user.email,
            username: user.username,
            status: user.status,
        }
    }
}

impl std::fmt::Debug for UserLoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoginDto")
            .field("username", &self.username)
            .finish()
    }
}

impl std::fmt::Debug for UserRegisterDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRegisterDto")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .finish()
    }
}
