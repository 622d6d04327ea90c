use crate::config::database::{Database, DatabaseTrait};
use crate::config::logging::secure_log;
use crate::entity::group::Group;
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

const SELECT_GROUP: &str = "SELECT id, name, created_at FROM animal_groups";

#[async_trait]
pub trait GroupRepositoryTrait: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Group>, AppError>;
    async fn find(&self, id: i64) -> Result<Option<Group>, AppError>;
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Group>, AppError>;
    async fn insert(&self, name: &str) -> Result<Group, AppError>;
    async fn update(&self, id: i64, name: &str) -> Result<Option<Group>, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct GroupRepository {
    db_conn: Arc<Database>,
}

impl GroupRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }
}

#[async_trait]
impl GroupRepositoryTrait for GroupRepository {
    async fn find_all(&self) -> Result<Vec<Group>, AppError> {
        let start = std::time::Instant::now();

        match sqlx::query_as::<_, Group>(&format!("{SELECT_GROUP} ORDER BY id"))
            .fetch_all(self.db_conn.get_pool())
            .await
        {
            Ok(groups) => {
                secure_log::sensitive_debug!("Group listing completed in {:?}", start.elapsed());
                Ok(groups)
            }
            Err(e) => {
                secure_log::secure_error!("Group listing failed", e);
                Err(e.into())
            }
        }
    }

    async fn find(&self, id: i64) -> Result<Option<Group>, AppError> {
        sqlx::query_as::<_, Group>(&format!("{SELECT_GROUP} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
            .map_err(|e| {
                secure_log::secure_error!("Group lookup by ID failed", e);
                e.into()
            })
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Group>, AppError> {
        sqlx::query_as::<_, Group>(&format!("{SELECT_GROUP} WHERE LOWER(name) = LOWER($1) ORDER BY id LIMIT 1"))
            .bind(name)
            .fetch_optional(self.db_conn.get_pool())
            .await
            .map_err(|e| {
                secure_log::secure_error!("Group lookup by name failed", e);
                e.into()
            })
    }

    async fn insert(&self, name: &str) -> Result<Group, AppError> {
        let group = sqlx::query_as::<_, Group>(
            "INSERT INTO animal_groups (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(self.db_conn.get_pool())
        .await?;

        secure_log::sensitive_debug!("Group {} created", group.id);
        Ok(group)
    }

    async fn update(&self, id: i64, name: &str) -> Result<Option<Group>, AppError> {
        let group = sqlx::query_as::<_, Group>(
            "UPDATE animal_groups SET name = $2 WHERE id = $1 RETURNING id, name, created_at",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.db_conn.get_pool())
        .await?;

        Ok(group)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM animal_groups WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
