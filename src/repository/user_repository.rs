use crate::config::database::{Database, DatabaseTrait};
use crate::config::logging::secure_log;
use crate::entity::role::{Role, RoleRow};
use crate::entity::user::{NewUser, User, UserRow};
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

const SELECT_USER: &str = "SELECT id, name, email, username, password, status, created_at FROM users";

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> Result<bool, AppError>;
    async fn find_all(&self) -> Result<Vec<User>, AppError>;
    /// Persist the user and its role link atomically.
    async fn insert(&self, user: &NewUser) -> Result<User, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct UserRepository {
    db_conn: Arc<Database>,
}

#[derive(sqlx::FromRow)]
struct UserRoleRow {
    user_id: i64,
    id: i64,
    role: String,
}

impl UserRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn roles_of<'e, E>(executor: E, user_id: i64) -> Result<Vec<Role>, AppError>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT r.id, r.role
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Role::try_from).collect()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let start = std::time::Instant::now();

        let row = match sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE username = $1"))
            .bind(username)
            .fetch_optional(self.db_conn.get_pool())
            .await
        {
            Ok(row) => {
                secure_log::sensitive_debug!("User lookup by username completed in {:?}", start.elapsed());
                row
            }
            Err(e) => {
                secure_log::secure_error!("User lookup by username failed", e);
                return Err(e.into());
            }
        };

        match row {
            Some(row) => {
                let roles = Self::roles_of(self.db_conn.get_pool(), row.id).await?;
                Ok(Some(row.into_user(roles)?))
            }
            None => Ok(None),
        }
    }

    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)")
            .bind(username)
            .bind(email)
            .fetch_one(self.db_conn.get_pool())
            .await
            .map_err(|e| {
                secure_log::secure_error!("User existence check failed", e);
                e.into()
            })
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let pool = self.db_conn.get_pool();
        let rows = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} ORDER BY id"))
            .fetch_all(pool)
            .await?;

        let links = sqlx::query_as::<_, UserRoleRow>(
            "SELECT ur.user_id, r.id, r.role FROM user_roles ur JOIN roles r ON r.id = ur.role_id ORDER BY r.id",
        )
        .fetch_all(pool)
        .await?;

        let mut roles_by_user: HashMap<i64, Vec<Role>> = HashMap::new();
        for link in links {
            let role = Role::try_from(RoleRow {
                id: link.id,
                role: link.role,
            })?;
            roles_by_user.entry(link.user_id).or_default().push(role);
        }

        rows.into_iter()
            .map(|row| {
                let roles = roles_by_user.remove(&row.id).unwrap_or_default();
                row.into_user(roles)
            })
            .collect()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, AppError> {
        let mut tx = self.db_conn.get_pool().begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, username, password, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, username, password, status, created_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.status.as_str())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(row.id)
            .bind(user.role_id)
            .execute(&mut *tx)
            .await?;

        let roles = Self::roles_of(&mut *tx, row.id).await?;
        tx.commit().await?;

        info!("User {} registered", row.id);
        row.into_user(roles)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
