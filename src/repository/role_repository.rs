use crate::config::database::{Database, DatabaseTrait};
use crate::entity::role::{Role, RoleKind, RoleRow};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait RoleRepositoryTrait: Send + Sync {
    async fn find_by_role(&self, role: RoleKind) -> Result<Option<Role>, AppError>;
}

#[derive(Clone)]
pub struct RoleRepository {
    db_conn: Arc<Database>,
}

impl RoleRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    async fn find_by_role(&self, role: RoleKind) -> Result<Option<Role>, AppError> {
        let row = sqlx::query_as::<_, RoleRow>("SELECT id, role FROM roles WHERE role = $1")
            .bind(role.as_str())
            .fetch_optional(self.db_conn.get_pool())
            .await?;
        row.map(Role::try_from).transpose()
    }
}
