pub(crate) mod animal_dto;
pub(crate) mod group_dto;
pub(crate) mod token_dto;
pub(crate) mod user_dto;
