use crate::config::logging::secure_log;
use crate::error::AppError;

/// Hash on the blocking pool; bcrypt is deliberately slow.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("password hashing task failed: {}", e)))?
        .map_err(|e| {
            secure_log::secure_error!("Failed to hash password", e);
            AppError::Internal("password hashing failed".to_string())
        })
}

/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("password verification task failed: {}", e)))?;

    match result {
        Ok(is_valid) => Ok(is_valid),
        Err(e) => {
            secure_log::secure_error!("SECURITY: Password verification system error", e);
            Ok(false)
        }
    }
}
