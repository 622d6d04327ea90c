use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{0}")]
    NotFound(String),
}

impl ResourceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ResourceError::NotFound(message.into())
    }

    pub fn group_not_found(id: i64) -> Self {
        ResourceError::NotFound(format!("Group not found with id {}", id))
    }
}
