//! Password gate and bearer-token registry.

use std::collections::HashSet;

use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory auth state: the configured password digest plus minted tokens.
pub struct AuthService {
    password_digest: Option<String>,
    tokens: Mutex<HashSet<String>>,
}

impl AuthService {
    /// Read APP_PASSWORD from the environment.
    ///
    /// Unset or empty disables the gate entirely: the server runs open and
    /// logs a warning at startup.
    pub fn from_env() -> Self {
        let password = std::env::var("APP_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());
        if password.is_none() {
            tracing::warn!("APP_PASSWORD is not set, running without authentication");
        }
        Self {
            password_digest: password.map(|p| digest(&p)),
            tokens: Mutex::new(HashSet::new()),
        }
    }

    /// Gate with a fixed password.
    pub fn with_password(password: &str) -> Self {
        Self {
            password_digest: Some(digest(password)),
            tokens: Mutex::new(HashSet::new()),
        }
    }

    /// Gate that accepts everything.
    pub fn disabled() -> Self {
        Self {
            password_digest: None,
            tokens: Mutex::new(HashSet::new()),
        }
    }

    /// Whether the password gate is active.
    pub fn enabled(&self) -> bool {
        self.password_digest.is_some()
    }

    /// Check a submitted password and mint a bearer token on success.
    ///
    /// Comparison is digest against digest. With the gate disabled any
    /// password logs in.
    pub async fn login(&self, password: &str) -> Option<String> {
        if let Some(expected) = &self.password_digest {
            if digest(password) != *expected {
                return None;
            }
        }

        let token = Uuid::new_v4().to_string();
        self.tokens.lock().await.insert(token.clone());
        Some(token)
    }

    /// Whether a bearer token was minted by this server.
    pub async fn verify(&self, token: &str) -> bool {
        if !self.enabled() {
            return true;
        }
        self.tokens.lock().await.contains(token)
    }
}

/// SHA-256 hex digest.
fn digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_with_correct_password() {
        let auth = AuthService::with_password("geheim");
        let token = auth.login("geheim").await;
        assert!(token.is_some());
        assert!(auth.verify(&token.unwrap()).await);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let auth = AuthService::with_password("geheim");
        assert!(auth.login("falsch").await.is_none());
        assert!(auth.login("").await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_token_rejected() {
        let auth = AuthService::with_password("geheim");
        assert!(!auth.verify("not-a-token").await);
    }

    #[tokio::test]
    async fn test_disabled_gate_accepts_everything() {
        let auth = AuthService::disabled();
        assert!(!auth.enabled());
        assert!(auth.login("anything").await.is_some());
        assert!(auth.verify("whatever").await);
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let d = digest("test content");
        assert_eq!(d.len(), 64);
        assert_eq!(d, digest("test content"));
        assert_ne!(d, digest("other content"));
    }
}
