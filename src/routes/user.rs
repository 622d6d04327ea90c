use crate::handler::user_handler;
use crate::middleware::authorization;
use crate::state::user_state::UserState;
use axum::{middleware, routing::delete, routing::get, Router};

pub fn routes() -> Router<UserState> {
    Router::<UserState>::new()
        .route("/", get(user_handler::list_users))
        .route("/{id}", delete(user_handler::delete_user))
        .route_layer(middleware::from_fn(authorization::require_administrator))
}
