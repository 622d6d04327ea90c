use crate::entity::role::Role;
use crate::entity::status::AccountStatus;
use crate::error::AppError;
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    /// bcrypt hash, never the plaintext.
    pub password: String,
    pub status: AccountStatus,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn authorities(&self) -> Vec<String> {
        self.roles.iter().map(|role| role.role.authority()).collect()
    }
}

/// Fields supplied when registering a user.
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub status: AccountStatus,
    pub role_id: i64,
}

#[derive(Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    pub fn into_user(self, roles: Vec<Role>) -> Result<User, AppError> {
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            username: self.username,
            password: self.password,
            status: self.status.parse()?,
            roles,
            created_at: self.created_at,
        })
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("status", &self.status)
            .field("roles", &self.roles)
            .finish()
    }
}
