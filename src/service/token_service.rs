use crate::config::parameter;
use crate::dto::token_dto::{TokenClaimsDto, TokenReadDto};
use crate::entity::user::User;
use crate::error::token_error::TokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};

/// Minimum HS256 key length (256 bits).
const MIN_SECRET_BYTES: usize = 32;

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    issuer: String,
    token_expiration_minutes: i64,
    leeway_seconds: u64,
}

pub trait TokenServiceTrait {
    fn new() -> Result<Self, TokenError>
    where
        Self: Sized;
    fn retrieve_token_claims(&self, token: &str) -> jsonwebtoken::errors::Result<TokenData<TokenClaimsDto>>;
    fn validate_token(&self, token: &str) -> Result<TokenClaimsDto, TokenError>;
    fn generate_token(&self, user: &User) -> Result<TokenReadDto, TokenError>;
}

impl TokenService {
    pub fn with_settings(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        token_expiration_minutes: i64,
        leeway_seconds: u64,
    ) -> Result<Self, TokenError> {
        let secret = secret.into();

        if secret.len() < MIN_SECRET_BYTES {
            return Err(TokenError::TokenCreationError(format!(
                "JWT secret must be at least {} bytes (256 bits). Current length: {}",
                MIN_SECRET_BYTES,
                secret.len()
            )));
        }

        Ok(Self {
            secret,
            issuer: issuer.into(),
            token_expiration_minutes,
            leeway_seconds,
        })
    }
}

impl TokenServiceTrait for TokenService {
    fn new() -> Result<Self, TokenError> {
        let secret = parameter::require("JWT_SECRET")
            .map_err(|e| TokenError::TokenCreationError(e.to_string()))?;

        Self::with_settings(
            secret,
            parameter::get("JWT_ISSUER"),
            parameter::get_i64("JWT_TTL_IN_MINUTES"),
            parameter::get_u64("JWT_LEEWAY_SECONDS"),
        )
    }

    fn retrieve_token_claims(&self, token: &str) -> jsonwebtoken::errors::Result<TokenData<TokenClaimsDto>> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = self.leeway_seconds;

        decode::<TokenClaimsDto>(token, &DecodingKey::from_secret(self.secret.as_ref()), &validation)
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaimsDto, TokenError> {
        match self.retrieve_token_claims(token) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::ExpiredToken),
                _ => Err(TokenError::InvalidToken),
            },
        }
    }

    fn generate_token(&self, user: &User) -> Result<TokenReadDto, TokenError> {
        let now = chrono::Utc::now();
        let iat = now.timestamp();
        let overflow = || TokenError::TokenCreationError("Token expiration calculation overflow".to_string());
        let ttl = chrono::TimeDelta::try_minutes(self.token_expiration_minutes).ok_or_else(overflow)?;
        let exp = now.checked_add_signed(ttl).ok_or_else(overflow)?.timestamp();

        let claims = TokenClaimsDto {
            sub: user.username.clone(),
            iat,
            exp,
            iss: self.issuer.clone(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| TokenError::TokenCreationError(e.to_string()))?;

        Ok(TokenReadDto {
            access_token: token,
            token_type: "Bearer".to_string(),
            iat,
            exp,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entity::status::AccountStatus;

    pub(crate) const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

    pub(crate) fn token_service() -> TokenService {
        TokenService::with_settings(TEST_SECRET, "animalz", 60, 0).unwrap()
    }

    fn user(username: &str) -> User {
        User {
            id: 1,
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            username: username.into(),
            password: String::new(),
            status: AccountStatus::Active,
            roles: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_issued_token_validates_to_username() {
        let service = token_service();
        let token = service.generate_token(&user("jane")).unwrap();

        let claims = service.validate_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, "jane");
        assert_eq!(claims.iss, "animalz");
        assert_eq!(token.exp - token.iat, 60 * 60);
        assert_eq!(token.token_type, "Bearer");
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let issuer = TokenService::with_settings(TEST_SECRET, "animalz", -5, 0).unwrap();
        let token = issuer.generate_token(&user("jane")).unwrap();

        assert!(matches!(
            token_service().validate_token(&token.access_token),
            Err(TokenError::ExpiredToken)
        ));
    }

    #[test]
    fn test_tampered_or_foreign_tokens_are_invalid() {
        let service = token_service();
        let token = service.generate_token(&user("jane")).unwrap().access_token;

        let forged = service.generate_token(&user("mallory")).unwrap().access_token;
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);
        assert!(matches!(service.validate_token(&tampered), Err(TokenError::InvalidToken)));

        let other_key = TokenService::with_settings("fedcba9876543210fedcba9876543210", "animalz", 60, 0).unwrap();
        let foreign = other_key.generate_token(&user("jane")).unwrap().access_token;
        assert!(matches!(service.validate_token(&foreign), Err(TokenError::InvalidToken)));

        let other_issuer = TokenService::with_settings(TEST_SECRET, "someone-else", 60, 0).unwrap();
        let foreign = other_issuer.generate_token(&user("jane")).unwrap().access_token;
        assert!(matches!(service.validate_token(&foreign), Err(TokenError::InvalidToken)));

        assert!(matches!(service.validate_token("not.a.jwt"), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_short_secret_is_rejected() {
        assert!(matches!(
            TokenService::with_settings("too-short", "animalz", 60, 0),
            Err(TokenError::TokenCreationError(_))
        ));
    }

    #[test]
    fn test_out_of_range_ttl_is_a_creation_error() {
        let issuer = TokenService::with_settings(TEST_SECRET, "animalz", i64::MAX, 0).unwrap();

        assert!(matches!(
            issuer.generate_token(&user("jane")),
            Err(TokenError::TokenCreationError(_))
        ));
    }
}
