// Admin credential checks
use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// Decides whether a username/password pair may open the admin panel.
///
/// Implementations can sit in front of any secret store, which is why the
/// check is async.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
}

pub fn sha256_hex(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

// Username plus the hex SHA-256 digest of the password
#[derive(Debug, Clone)]
pub struct Sha256Credentials {
    username: String,
    password_sha256: String,
}

impl Sha256Credentials {
    pub fn new(username: impl Into<String>, password_sha256: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_sha256: password_sha256.into().trim().to_lowercase(),
        }
    }
}

#[async_trait]
impl CredentialVerifier for Sha256Credentials {
    async fn verify(&self, username: &str, password: &str) -> bool {
        let digest = sha256_hex(password);
        // Both fields are always compared
        let user_ok = username == self.username;
        let password_ok = digest == self.password_sha256;
        user_ok & password_ok
    }
}

// Used when no admin account is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCredentials;

#[async_trait]
impl CredentialVerifier for DisabledCredentials {
    async fn verify(&self, _username: &str, _password: &str) -> bool {
        false
    }
}
