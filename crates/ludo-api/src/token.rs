use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use ludo_types::{AdminClaims, AdminRole};

use crate::error::ApiError;

/// Issues and checks HS256 access tokens for admin sessions.
pub struct TokenService {
    lifetime: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str, lifetimeMinutes: i64) -> Self {
        Self {
            lifetime: Duration::minutes(lifetimeMinutes),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, username: &str, role: AdminRole) -> Result<String, ApiError> {
        let claims = AdminClaims {
            username: username.to_string(),
            role,
            exp: (Utc::now() + self.lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("failed to sign token: {e}")))
    }

    pub fn validate(&self, token: &str) -> Result<AdminClaims, ApiError> {
        decode::<AdminClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("rejected token: {e}");
                ApiError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_validates() {
        let service = TokenService::new("test-secret", 60);
        let token = service.issue("admin", AdminRole::Owner).unwrap();

        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, AdminRole::Owner);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new("test-secret", 60);
        let claims = AdminClaims {
            username: "admin".into(),
            role: AdminRole::Owner,
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(service.validate(&token), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let issuer = TokenService::new("secret-a", 60);
        let verifier = TokenService::new("secret-b", 60);
        let token = issuer.issue("admin", AdminRole::Moderator).unwrap();

        assert!(matches!(verifier.validate(&token), Err(ApiError::Unauthorized)));
        assert!(matches!(verifier.validate("null"), Err(ApiError::Unauthorized)));
    }
}
