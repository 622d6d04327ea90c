use crate::config::database::DatabaseTrait;
use crate::config::logging::secure_log;
use crate::response::app_response::SuccessResponse;
use crate::state::health_state::HealthState;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub database: DatabaseHealth,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u128>,
}

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

pub fn init_start_time() {
    START_TIME.set(Instant::now()).ok();
}

pub fn get_uptime_seconds() -> u64 {
    START_TIME
        .get()
        .map(|start| start.elapsed().as_secs())
        .unwrap_or(0)
}

async fn check_database(state: &HealthState) -> DatabaseHealth {
    let Some(database) = &state.database else {
        return DatabaseHealth {
            status: "not_configured".to_string(),
            response_time_ms: None,
        };
    };

    let start = Instant::now();
    match sqlx::query("SELECT 1").execute(database.get_pool()).await {
        Ok(_) => DatabaseHealth {
            status: "healthy".to_string(),
            response_time_ms: Some(start.elapsed().as_millis()),
        },
        Err(e) => {
            secure_log::secure_error!("Database health check failed", e);
            DatabaseHealth {
                status: "unhealthy".to_string(),
                response_time_ms: None,
            }
        }
    }
}

pub async fn health_check(State(state): State<HealthState>) -> SuccessResponse<HealthStatus> {
    let database = check_database(&state).await;
    let healthy = database.status != "unhealthy";

    let health = HealthStatus {
        status: if healthy { "UP" } else { "DOWN" }.to_string(),
        uptime_seconds: get_uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    };

    if healthy {
        SuccessResponse::send("Service is healthy", health)
    } else {
        SuccessResponse::send("Service is unhealthy", health).with_status(StatusCode::SERVICE_UNAVAILABLE)
    }
}
