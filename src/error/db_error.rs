use thiserror::Error;

/// SQLSTATE codes reported by Postgres for integrity violations.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("{0}")]
    DataIntegrity(String),
    #[error("{0}")]
    SomethingWentWrong(String),
}

impl From<sqlx::Error> for DbError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &error {
            match db_error.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    return DbError::DataIntegrity("A record with the same unique value already exists".to_string());
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return DbError::DataIntegrity("The record is still referenced by other records".to_string());
                }
                _ => {}
            }
        }
        DbError::SomethingWentWrong(error.to_string())
    }
}
