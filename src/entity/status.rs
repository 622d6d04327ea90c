use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a user account. Only `Active` accounts may sign in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
    CredentialsExpired,
    Expired,
    Blocked,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Inactive => "INACTIVE",
            AccountStatus::CredentialsExpired => "CREDENTIALS_EXPIRED",
            AccountStatus::Expired => "EXPIRED",
            AccountStatus::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(AccountStatus::Active),
            "INACTIVE" => Ok(AccountStatus::Inactive),
            "CREDENTIALS_EXPIRED" => Ok(AccountStatus::CredentialsExpired),
            "EXPIRED" => Ok(AccountStatus::Expired),
            "BLOCKED" => Ok(AccountStatus::Blocked),
            other => Err(AppError::Internal(format!("unknown account status '{}'", other))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimalStatus {
    #[default]
    Active,
    Inactive,
}

impl AnimalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalStatus::Active => "ACTIVE",
            AnimalStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(AnimalStatus::Active),
            "INACTIVE" => Ok(AnimalStatus::Inactive),
            other => Err(AppError::Internal(format!("unknown animal status '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_status_round_trips_through_text() {
        for status in [
            AccountStatus::Active,
            AccountStatus::Inactive,
            AccountStatus::CredentialsExpired,
            AccountStatus::Expired,
            AccountStatus::Blocked,
        ] {
            assert_eq!(status.as_str().parse::<AccountStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn test_animal_status_is_case_insensitive() {
        assert_eq!("inactive".parse::<AnimalStatus>().ok(), Some(AnimalStatus::Inactive));
        assert!("EXTINCT".parse::<AnimalStatus>().is_err());
    }
}
