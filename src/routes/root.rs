use super::{animal, auth, group, health, user};
use crate::handler::fallback_handler;
use crate::middleware::{auth as auth_middleware, error_envelope};
use crate::repository::Repositories;
use crate::service::token_service::TokenService;
use crate::service::user_service::UserService;
use crate::state::animal_state::AnimalState;
use crate::state::auth_state::AuthState;
use crate::state::group_state::GroupState;
use crate::state::health_state::HealthState;
use crate::state::token_state::TokenState;
use crate::state::user_state::UserState;
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn routes(
    repositories: &Repositories,
    token_service: TokenService,
    user_service: UserService,
    health_state: HealthState,
) -> Router {
    let v1_router = {
        let auth_state = AuthState::new(repositories, token_service.clone(), user_service.clone());
        let user_state = UserState::new(user_service.clone());

        Router::new()
            .nest("/auth", auth::routes().with_state(auth_state))
            .nest("/animals", animal::routes().with_state(AnimalState::new(repositories)))
            .nest("/groups", group::routes().with_state(GroupState::new(repositories)))
            .nest("/users", user::routes().with_state(user_state))
            .nest("/public", health::routes().with_state(health_state))
    };

    let token_state = TokenState::new(token_service, user_service);

    Router::new()
        .nest("/v1", v1_router)
        .fallback(fallback_handler::not_found)
        .method_not_allowed_fallback(fallback_handler::method_not_allowed)
        .layer(middleware::from_fn_with_state(token_state, auth_middleware::auth))
        .layer(middleware::from_fn(error_envelope::stamp_path))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
