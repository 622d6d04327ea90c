use crate::handler::group_handler;
use crate::state::group_state::GroupState;
use axum::{routing::get, Router};

pub fn routes() -> Router<GroupState> {
    Router::<GroupState>::new()
        .route("/", get(group_handler::list_groups).post(group_handler::create_group))
        .route(
            "/{id}",
            get(group_handler::get_group)
                .put(group_handler::update_group)
                .delete(group_handler::delete_group),
        )
}
