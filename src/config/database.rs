use crate::config::parameter;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Pool, Postgres, pool::PoolOptions};
use std::time::Duration;
use tracing::info;

pub struct Database {
    pool: Pool<Postgres>,
}

#[async_trait]
pub trait DatabaseTrait {
    async fn init() -> Result<Self, AppError>
    where
        Self: Sized;
    fn get_pool(&self) -> &Pool<Postgres>;
}

#[async_trait]
impl DatabaseTrait for Database {
    async fn init() -> Result<Self, AppError> {
        let database_url = parameter::require("DATABASE_URL")?;

        let max_connections = parameter::get_u64("DB_MAX_CONNECTIONS") as u32;
        let min_connections = parameter::get_u64("DB_MIN_CONNECTIONS") as u32;
        let acquire_timeout_seconds = parameter::get_u64("DB_ACQUIRE_TIMEOUT_SECONDS");
        let idle_timeout_seconds = parameter::get_u64("DB_IDLE_TIMEOUT_SECONDS");
        let max_lifetime_seconds = parameter::get_u64("DB_MAX_LIFETIME_SECONDS");

        let pool = PoolOptions::<Postgres>::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_seconds))
            .idle_timeout(Duration::from_secs(idle_timeout_seconds))
            .max_lifetime(Duration::from_secs(max_lifetime_seconds))
            .connect(&database_url)
            .await?;

        // Pool sizing is only worth printing outside production.
        let is_development = cfg!(debug_assertions)
            || parameter::get_optional("ENV")
                .map(|env| env == "development")
                .unwrap_or(false);
        if is_development {
            info!(
                "Database pool configured: max={}, min={}, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
                max_connections, min_connections, acquire_timeout_seconds, idle_timeout_seconds, max_lifetime_seconds
            );
        } else {
            info!("Database pool configured successfully");
        }

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::Config(format!("database migration failed: {}", e)))?;
        info!("Database migrations applied");

        Ok(Self { pool })
    }

    fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
