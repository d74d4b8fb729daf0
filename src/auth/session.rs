use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Payload of a signed admin session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks HS256 session tokens. Nothing is stored server-side;
/// a token is valid until its `exp`.
pub struct SessionSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    duration: Duration,
}

impl SessionSigner {
    pub fn new(secret: &str, duration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            duration: Duration::hours(duration_hours),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn issue(&self, subject: &str) -> Result<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.duration).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// `None` for a bad signature, malformed token or expired session.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        match decode::<SessionClaims>(token, &self.decoding_key, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Rejected session token: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let signer = SessionSigner::new("secret", 1);
        let token = signer.issue("admin").unwrap();
        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let token = SessionSigner::new("one", 1).issue("admin").unwrap();
        assert!(SessionSigner::new("two", 1).verify(&token).is_none());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the default 60s validation leeway.
        let token = SessionSigner::new("secret", -2).issue("admin").unwrap();
        assert!(SessionSigner::new("secret", 1).verify(&token).is_none());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(SessionSigner::new("secret", 1).verify("not-a-token").is_none());
    }
}
