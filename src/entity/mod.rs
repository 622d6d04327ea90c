pub(crate) mod animal;
pub(crate) mod group;
pub(crate) mod principal;
pub(crate) mod role;
pub(crate) mod status;
pub(crate) mod user;
