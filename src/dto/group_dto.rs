use crate::entity::group::Group;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupDto {
    pub id: i64,
    pub name: String,
}

impl From<Group> for GroupDto {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct GroupRequestDto {
    #[validate(required(message = "Name is required"))]
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
}

impl GroupRequestDto {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
