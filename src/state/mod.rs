pub(crate) mod animal_state;
pub(crate) mod auth_state;
pub(crate) mod group_state;
pub(crate) mod health_state;
pub(crate) mod token_state;
pub(crate) mod user_state;
