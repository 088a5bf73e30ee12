//! JWT token service
//!
//! Issues and verifies the HS256 tokens handed out at login.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::warn;

const MIN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC secret, at least 32 bytes
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    pub issuer: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: generate_dev_secret(),
            expiration_minutes: 1440,
            issuer: "travel-order".to_string(),
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secret = match crate::config::var("JWT_SECRET") {
            Some(secret) if secret.len() >= MIN_SECRET_LEN => secret,
            Some(_) => {
                warn!("JWT_SECRET shorter than {MIN_SECRET_LEN} characters, using a temporary key");
                defaults.secret
            }
            None => {
                warn!("JWT_SECRET not set, using a temporary key; tokens will not survive a restart");
                defaults.secret
            }
        };

        Self {
            secret,
            expiration_minutes: crate::config::parse_or(
                "JWT_EXPIRATION_MINUTES",
                defaults.expiration_minutes,
            ),
            issuer: crate::config::var("JWT_ISSUER").unwrap_or(defaults.issuer),
        }
    }
}

fn generate_dev_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Claims carried in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    Expired,

    #[error("Token generation failed: {0}")]
    Encoding(String),
}

#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn issue(&self, account_id: &str, username: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.config.expiration_minutes)).timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Encoding(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(expiration_minutes: i64) -> JwtService {
        JwtService::new(JwtConfig {
            secret: "unit-test-secret-that-is-long-enough-0123".to_string(),
            expiration_minutes,
            issuer: "travel-order".to_string(),
        })
    }

    #[test]
    fn test_issue_and_verify() {
        let jwt = service(60);
        let token = jwt.issue("id-1", "traveler").unwrap();
        let claims = jwt.verify(&token).unwrap();
        assert_eq!(claims.sub, "id-1");
        assert_eq!(claims.username, "traveler");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt = service(-10);
        let token = jwt.issue("id-1", "traveler").unwrap();
        assert!(matches!(jwt.verify(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let token = service(60).issue("id-1", "traveler").unwrap();
        let other = JwtService::new(JwtConfig {
            secret: "a-completely-different-secret-0123456789".to_string(),
            expiration_minutes: 60,
            issuer: "travel-order".to_string(),
        });
        assert!(matches!(
            other.verify(&token),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(service(60).verify("not-a-token").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", JwtConfig::default());
        assert!(rendered.contains("<redacted>"));
    }
}
