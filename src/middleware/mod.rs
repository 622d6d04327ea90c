pub(crate) mod auth;
pub(crate) mod authorization;
pub(crate) mod error_envelope;
