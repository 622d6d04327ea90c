use crate::handler::auth_handler;
use crate::state::auth_state::AuthState;
use axum::{routing::post, Router};

pub fn routes() -> Router<AuthState> {
    Router::<AuthState>::new()
        .route("/sign-up", post(auth_handler::sign_up))
        .route("/sign-in", post(auth_handler::sign_in))
        .route("/sign-out", post(auth_handler::sign_out))
}
