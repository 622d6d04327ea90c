use crate::handler::animal_handler;
use crate::state::animal_state::AnimalState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AnimalState> {
    Router::<AnimalState>::new()
        .route(
            "/",
            get(animal_handler::list_animals).post(animal_handler::create_animal),
        )
        .route(
            "/{id}",
            get(animal_handler::get_animal)
                .put(animal_handler::update_animal)
                .patch(animal_handler::patch_animal)
                .delete(animal_handler::delete_animal),
        )
        .route("/groups/{group}", get(animal_handler::get_animals_by_group))
}
