use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use cookie::{Cookie, SameSite};

use crate::{
    config::AuthConfig,
    error::{AppError, Result},
};

pub mod session;

pub use session::{SessionClaims, SessionSigner};

pub const SESSION_COOKIE: &str = "session";

/// Single-account admin authentication.
pub struct AuthService {
    admin_username: String,
    password_hash: Option<String>,
    signer: SessionSigner,
    secure_cookies: bool,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let password_hash = match (&config.admin_password_hash, &config.admin_password) {
            (Some(hash), _) => {
                PasswordHash::new(hash)
                    .map_err(|e| AppError::Internal(format!("Invalid admin password hash: {}", e)))?;
                Some(hash.clone())
            }
            (None, Some(plain)) => {
                tracing::warn!("auth.admin_password is set in plaintext; configure auth.admin_password_hash instead");
                Some(Self::hash_password(plain)?)
            }
            (None, None) => {
                tracing::warn!("No admin password configured; admin login is disabled");
                None
            }
        };

        if config.session_secret == "change-me-in-production" {
            tracing::warn!("auth.session_secret is the default value; sessions can be forged");
        }

        Ok(Self {
            admin_username: config.admin_username.clone(),
            password_hash,
            signer: SessionSigner::new(&config.session_secret, config.session_duration_hours),
            secure_cookies: config.secure_cookies,
        })
    }

    pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        let argon2 = Argon2::default();

        Ok(argon2.verify_password(password.as_bytes(), &parsed_hash).is_ok())
    }

    pub fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    /// Returns a signed session token when the credentials match.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<String>> {
        let Some(hash) = &self.password_hash else {
            return Ok(None);
        };

        if username != self.admin_username || !Self::verify_password(password, hash)? {
            return Ok(None);
        }

        self.signer.issue(username).map(Some)
    }

    /// Claims for a token that is validly signed, unexpired and names the admin.
    pub fn validate_session(&self, token: &str) -> Option<SessionClaims> {
        self.signer
            .verify(token)
            .filter(|claims| claims.sub == self.admin_username)
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        self.signer.duration()
    }

    pub fn create_session_cookie(&self, token: &str) -> Cookie<'static> {
        let max_age = cookie::time::Duration::seconds(self.signer.duration().num_seconds());

        Cookie::build((SESSION_COOKIE, token.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(self.secure_cookies)
            .max_age(max_age)
            .build()
    }

    pub fn create_logout_cookie() -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .max_age(cookie::time::Duration::seconds(0))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_password(password: &str) -> AuthConfig {
        AuthConfig {
            admin_username: "admin".to_string(),
            admin_password_hash: Some(AuthService::hash_password(password).unwrap()),
            admin_password: None,
            session_secret: "test-secret".to_string(),
            session_duration_hours: 1,
            secure_cookies: false,
        }
    }

    #[test]
    fn password_hashing_roundtrip() {
        let hash = AuthService::hash_password("my_secure_password").unwrap();
        assert!(AuthService::verify_password("my_secure_password", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn login_requires_matching_username_and_password() {
        let auth = AuthService::new(&config_with_password("nowzer2024")).unwrap();
        assert!(auth.login("admin", "nowzer2024").unwrap().is_some());
        assert!(auth.login("admin", "wrong").unwrap().is_none());
        assert!(auth.login("root", "nowzer2024").unwrap().is_none());
    }

    #[test]
    fn login_disabled_without_password() {
        let mut config = config_with_password("x");
        config.admin_password_hash = None;
        let auth = AuthService::new(&config).unwrap();
        assert!(auth.login("admin", "x").unwrap().is_none());
    }

    #[test]
    fn plaintext_password_is_hashed_at_startup() {
        let mut config = config_with_password("x");
        config.admin_password_hash = None;
        config.admin_password = Some("plain".to_string());
        let auth = AuthService::new(&config).unwrap();
        let token = auth.login("admin", "plain").unwrap().unwrap();
        assert_eq!(auth.validate_session(&token).unwrap().sub, "admin");
    }

    #[test]
    fn invalid_configured_hash_is_an_error() {
        let mut config = config_with_password("x");
        config.admin_password_hash = Some("not-a-phc-string".to_string());
        assert!(AuthService::new(&config).is_err());
    }
}
