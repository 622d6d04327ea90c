use crate::config::database::{Database, DatabaseTrait};
use crate::config::logging::secure_log;
use crate::entity::animal::{Animal, AnimalChanges, AnimalRow};
use crate::error::AppError;
use crate::error::resource_error::ResourceError;
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;

const SELECT_ANIMAL: &str = r#"
    SELECT a.id, a.scientific_name, a.specie, a.size, a.mass, a.status, a.created_at,
           g.id AS group_id, g.name AS group_name, g.created_at AS group_created_at
    FROM animals a
    JOIN animal_groups g ON g.id = a.group_id
"#;

#[async_trait]
pub trait AnimalRepositoryTrait: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Animal>, AppError>;
    async fn find(&self, id: i64) -> Result<Option<Animal>, AppError>;
    async fn find_by_group_id(&self, group_id: i64) -> Result<Vec<Animal>, AppError>;
    async fn find_by_group_name_ignore_case(&self, group_name: &str) -> Result<Vec<Animal>, AppError>;
    async fn insert(&self, changes: &AnimalChanges) -> Result<Animal, AppError>;
    /// Replace every mutable field. `None` when no animal has this id.
    async fn update(&self, id: i64, changes: &AnimalChanges) -> Result<Option<Animal>, AppError>;
    /// Replace only the naming fields. `None` when no animal has this id.
    async fn rename(&self, id: i64, scientific_name: &str, specie: &str) -> Result<Option<Animal>, AppError>;
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct AnimalRepository {
    db_conn: Arc<Database>,
}

impl AnimalRepository {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn fetch_in(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<Option<Animal>, AppError> {
        let row = sqlx::query_as::<_, AnimalRow>(&format!("{SELECT_ANIMAL} WHERE a.id = $1"))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        row.map(Animal::try_from).transpose()
    }

    /// Lock the group row for the rest of the transaction so it cannot be
    /// deleted between the check and the write.
    async fn lock_group(tx: &mut Transaction<'_, Postgres>, group_id: i64) -> Result<(), AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM animal_groups WHERE id = $1 FOR SHARE")
            .bind(group_id)
            .fetch_optional(&mut **tx)
            .await?;
        found.map(|_| ()).ok_or_else(|| ResourceError::group_not_found(group_id).into())
    }

    fn collect(rows: Vec<AnimalRow>) -> Result<Vec<Animal>, AppError> {
        rows.into_iter().map(Animal::try_from).collect()
    }
}

#[async_trait]
impl AnimalRepositoryTrait for AnimalRepository {
    async fn find_all(&self) -> Result<Vec<Animal>, AppError> {
        let start = std::time::Instant::now();

        match sqlx::query_as::<_, AnimalRow>(&format!("{SELECT_ANIMAL} ORDER BY a.id"))
            .fetch_all(self.db_conn.get_pool())
            .await
        {
            Ok(rows) => {
                secure_log::sensitive_debug!("Animal listing completed in {:?}", start.elapsed());
                Self::collect(rows)
            }
            Err(e) => {
                secure_log::secure_error!("Animal listing failed", e);
                Err(e.into())
            }
        }
    }

    async fn find(&self, id: i64) -> Result<Option<Animal>, AppError> {
        let row = sqlx::query_as::<_, AnimalRow>(&format!("{SELECT_ANIMAL} WHERE a.id = $1"))
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
            .map_err(|e| {
                secure_log::secure_error!("Animal lookup by ID failed", e);
                AppError::from(e)
            })?;
        row.map(Animal::try_from).transpose()
    }

    async fn find_by_group_id(&self, group_id: i64) -> Result<Vec<Animal>, AppError> {
        let rows = sqlx::query_as::<_, AnimalRow>(&format!("{SELECT_ANIMAL} WHERE g.id = $1 ORDER BY a.id"))
            .bind(group_id)
            .fetch_all(self.db_conn.get_pool())
            .await?;
        Self::collect(rows)
    }

    async fn find_by_group_name_ignore_case(&self, group_name: &str) -> Result<Vec<Animal>, AppError> {
        let rows = sqlx::query_as::<_, AnimalRow>(&format!(
            "{SELECT_ANIMAL} WHERE LOWER(g.name) = LOWER($1) ORDER BY a.id"
        ))
        .bind(group_name)
        .fetch_all(self.db_conn.get_pool())
        .await?;
        Self::collect(rows)
    }

    async fn insert(&self, changes: &AnimalChanges) -> Result<Animal, AppError> {
        let mut tx = self.db_conn.get_pool().begin().await?;
        Self::lock_group(&mut tx, changes.group_id).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO animals (scientific_name, specie, size, mass, status, group_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&changes.scientific_name)
        .bind(&changes.specie)
        .bind(changes.size)
        .bind(changes.mass)
        .bind(changes.status.as_str())
        .bind(changes.group_id)
        .fetch_one(&mut *tx)
        .await?;

        let animal = Self::fetch_in(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("animal {} vanished after insert", id)))?;
        tx.commit().await?;

        secure_log::sensitive_debug!("Animal {} created in group {}", animal.id, animal.group.id);
        Ok(animal)
    }

    async fn update(&self, id: i64, changes: &AnimalChanges) -> Result<Option<Animal>, AppError> {
        let mut tx = self.db_conn.get_pool().begin().await?;
        Self::lock_group(&mut tx, changes.group_id).await?;

        let result = sqlx::query(
            r#"
            UPDATE animals
            SET scientific_name = $2, specie = $3, size = $4, mass = $5, status = $6, group_id = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.scientific_name)
        .bind(&changes.specie)
        .bind(changes.size)
        .bind(changes.mass)
        .bind(changes.status.as_str())
        .bind(changes.group_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let animal = Self::fetch_in(&mut tx, id).await?;
        tx.commit().await?;
        Ok(animal)
    }

    async fn rename(&self, id: i64, scientific_name: &str, specie: &str) -> Result<Option<Animal>, AppError> {
        let mut tx = self.db_conn.get_pool().begin().await?;

        let result = sqlx::query("UPDATE animals SET scientific_name = $2, specie = $3 WHERE id = $1")
            .bind(id)
            .bind(scientific_name)
            .bind(specie)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let animal = Self::fetch_in(&mut tx, id).await?;
        tx.commit().await?;
        Ok(animal)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
