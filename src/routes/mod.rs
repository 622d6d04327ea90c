pub(crate) mod animal;
pub(crate) mod auth;
pub(crate) mod group;
pub(crate) mod health;
pub(crate) mod root;
pub(crate) mod user;
