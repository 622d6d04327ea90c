pub(crate) mod animal_service;
pub(crate) mod authentication_service;
pub(crate) mod group_service;
pub(crate) mod password;
pub(crate) mod role_service;
pub(crate) mod token_service;
pub(crate) mod user_service;
