use std::sync::Arc;
use crate::config::{database, parameter};
use crate::config::database::DatabaseTrait;
use crate::handler::health_handler;
use crate::repository::Repositories;
use crate::service::token_service::{TokenService, TokenServiceTrait};
use crate::service::user_service::UserService;
use crate::state::health_state::HealthState;
use tracing::{error, info};

mod config;
mod dto;
mod entity;
mod error;
mod handler;
mod middleware;
mod repository;
mod response;
mod routes;
mod service;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    parameter::init();
    config::logging::init();

    info!("Starting animalz API...");

    health_handler::init_start_time();

    let connection = match database::Database::init().await {
        Ok(conn) => {
            info!("Database connection established successfully");
            Arc::new(conn)
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
    };

    // A weak or missing JWT secret aborts startup.
    let token_service = match TokenService::new() {
        Ok(service) => service,
        Err(e) => {
            error!("Failed to initialize token service: {}", e);
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
    };

    let repositories = Repositories::postgres(&connection);
    let user_service = UserService::new(&repositories);
    let app = routes::root::routes(
        &repositories,
        token_service,
        user_service,
        HealthState::new(Some(connection)),
    );

    let host = format!("{}:{}", parameter::get("SERVER_ADDRESS"), parameter::get("SERVER_PORT"));
    let listener = match tokio::net::TcpListener::bind(&host).await {
        Ok(listener) => {
            info!("Server successfully bound to {}", host);
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", host, e);
            return Err(e.into());
        }
    };

    match axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        Ok(_) => {
            info!("Server shutdown gracefully");
            Ok(())
        }
        Err(e) => {
            error!("Server error: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal, initiating graceful shutdown..."),
        Err(err) => error!("Unable to listen for shutdown signal: {}", err),
    }
}
