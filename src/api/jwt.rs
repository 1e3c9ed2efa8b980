use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AuthConfig;

const SESSION_TOKEN_TYPE: &str = "session";

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
    pub token_type: String,
}

/// Issues and verifies HS256 session tokens
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_minutes: u64,
}

impl JwtService {
    pub fn new(secret: &str, access_token_minutes: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_minutes,
        }
    }

    /// Create JwtService from config
    ///
    /// An empty secret is replaced by a random one, which invalidates all
    /// sessions on restart.
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret = if config.jwt_secret.is_empty() {
            warn!("JWT secret not configured, generating a random secret for this process");
            crate::utils::generate_secure_token(32)
        } else {
            config.jwt_secret.clone()
        };

        Self::new(&secret, config.access_token_minutes)
    }

    /// Token expiry, saturating at the largest representable instant
    fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        i64::try_from(self.access_token_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn generate_token(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = TokenPayload {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: self.expires_at(now).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
            token_type: SESSION_TOKEN_TYPE.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// `None` for malformed, expired or foreign tokens.
    pub fn verify_token(&self, token: &str) -> Option<TokenPayload> {
        let token_data =
            match decode::<TokenPayload>(token, &self.decoding_key, &Validation::default()) {
                Ok(data) => data,
                Err(e) => {
                    debug!("Token validation failed: {}", e);
                    return None;
                }
            };

        let claims = token_data.claims;
        if claims.token_type != SESSION_TOKEN_TYPE || claims.username.is_empty() {
            debug!("Token rejected: unexpected claims");
            return None;
        }

        Some(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test_secret_key_32_bytes_long!!", 15)
    }

    #[test]
    fn test_generate_and_verify() {
        let service = create_test_service();
        let token = service.generate_token("alice").unwrap();
        let payload = service.verify_token(&token).unwrap();

        assert_eq!(payload.username, "alice");
        assert_eq!(payload.token_type, "session");
        assert!(payload.exp > payload.iat);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        assert!(service.verify_token("invalid.token.here").is_none());
        assert!(service.verify_token("").is_none());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service1 = create_test_service();
        let service2 = JwtService::new("different_secret_key_32_bytes!!", 15);

        let token = service1.generate_token("alice").unwrap();
        assert!(service2.verify_token(&token).is_none());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();

        // 过期时间超过默认 leeway
        let now = Utc::now();
        let claims = TokenPayload {
            username: "alice".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
            token_type: SESSION_TOKEN_TYPE.to_string(),
        };
        let key = EncodingKey::from_secret(b"test_secret_key_32_bytes_long!!");
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(service.verify_token(&token).is_none());
    }

    #[test]
    fn test_foreign_token_type_rejected() {
        let service = create_test_service();
        let now = Utc::now();
        let claims = TokenPayload {
            username: "alice".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(5)).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
            token_type: "refresh".to_string(),
        };
        let key = EncodingKey::from_secret(b"test_secret_key_32_bytes_long!!");
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(service.verify_token(&token).is_none());
    }

    #[test]
    fn test_huge_lifetime_saturates() {
        let service = JwtService::new("test_secret_key_32_bytes_long!!", u64::MAX);
        let token = service.generate_token("alice").unwrap();
        let payload = service.verify_token(&token).unwrap();

        assert_eq!(payload.exp, DateTime::<Utc>::MAX_UTC.timestamp());
    }

    #[test]
    fn test_from_config_with_empty_secret() {
        let config = AuthConfig::default();
        let service = JwtService::from_config(&config);
        let token = service.generate_token("bob").unwrap();
        assert_eq!(service.verify_token(&token).unwrap().username, "bob");
    }
}
