// Desk configuration, read from the environment (and a .env file, if any)
use crate::credentials::{CredentialVerifier, DisabledCredentials, Sha256Credentials};
use crate::export::{ExportFormat, DEFAULT_EXPORT_PATH};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_EXPORT_PATH: &str = "HOTEL_EXPORT_PATH";
pub const ENV_EXPORT_FORMAT: &str = "HOTEL_EXPORT_FORMAT";
pub const ENV_EXPORT_ON_EXIT: &str = "HOTEL_EXPORT_ON_EXIT";
pub const ENV_ADMIN_USERNAME: &str = "HOTEL_ADMIN_USERNAME";
pub const ENV_ADMIN_PASSWORD_SHA256: &str = "HOTEL_ADMIN_PASSWORD_SHA256";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("{0} is set but {1} is missing")]
    IncompleteCredentials(&'static str, &'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    pub username: String,
    pub password_sha256: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub export_path: PathBuf,
    pub export_format: ExportFormat,
    pub export_on_exit: bool,
    pub admin: Option<AdminAccount>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            export_format: ExportFormat::Json,
            export_on_exit: false,
            admin: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds the config from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = AppConfig::default();

        if let Some(path) = get(ENV_EXPORT_PATH) {
            config.export_path = PathBuf::from(path.trim());
        }

        config.export_format = match get(ENV_EXPORT_FORMAT) {
            Some(format) => format
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    key: ENV_EXPORT_FORMAT.to_string(),
                    message,
                })?,
            None => ExportFormat::from_path(&config.export_path),
        };

        if let Some(flag) = get(ENV_EXPORT_ON_EXIT) {
            config.export_on_exit = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_EXPORT_ON_EXIT.to_string(),
                message: format!("expected true or false, got '{}'", flag),
            })?;
        }

        config.admin = match (get(ENV_ADMIN_USERNAME), get(ENV_ADMIN_PASSWORD_SHA256)) {
            (Some(username), Some(password_sha256)) => {
                let digest = password_sha256.trim().to_lowercase();
                if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_ADMIN_PASSWORD_SHA256.to_string(),
                        message: "expected a hex encoded SHA-256 digest".to_string(),
                    });
                }
                Some(AdminAccount {
                    username: username.trim().to_string(),
                    password_sha256: digest,
                })
            }
            (Some(_), None) => {
                return Err(ConfigError::IncompleteCredentials(
                    ENV_ADMIN_USERNAME,
                    ENV_ADMIN_PASSWORD_SHA256,
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::IncompleteCredentials(
                    ENV_ADMIN_PASSWORD_SHA256,
                    ENV_ADMIN_USERNAME,
                ))
            }
            (None, None) => None,
        };

        Ok(config)
    }

    pub fn credential_verifier(&self) -> Box<dyn CredentialVerifier> {
        match &self.admin {
            Some(account) => Box::new(Sha256Credentials::new(
                account.username.clone(),
                account.password_sha256.clone(),
            )),
            None => {
                tracing::warn!(
                    "no admin account configured ({} / {}), admin login is disabled",
                    ENV_ADMIN_USERNAME,
                    ENV_ADMIN_PASSWORD_SHA256
                );
                Box::new(DisabledCredentials)
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::sha256_hex;
    use std::collections::HashMap;
    use test_case::test_case;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.export_path, PathBuf::from("hotel_data.json"));
        assert!(config.admin.is_none());
    }

    #[test]
    fn test_format_follows_export_path() {
        let config = config_from(&[(ENV_EXPORT_PATH, "out/hotel.xml")]).unwrap();
        assert_eq!(config.export_format, ExportFormat::Xml);

        let config = config_from(&[
            (ENV_EXPORT_PATH, "out/hotel.xml"),
            (ENV_EXPORT_FORMAT, "json"),
        ])
        .unwrap();
        assert_eq!(config.export_format, ExportFormat::Json);
    }

    #[test_case("true", true; "#1 true")]
    #[test_case("YES", true; "#2 yes uppercase")]
    #[test_case("0", false; "#3 zero")]
    #[test_case(" off ", false; "#4 off padded")]
    fn test_export_on_exit_flag(value: &str, expected: bool) {
        let config = config_from(&[(ENV_EXPORT_ON_EXIT, value)]).unwrap();
        assert_eq!(config.export_on_exit, expected);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = config_from(&[(ENV_EXPORT_ON_EXIT, "sometimes")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_EXPORT_ON_EXIT));

        let err = config_from(&[(ENV_EXPORT_FORMAT, "csv")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_EXPORT_FORMAT));

        let err = config_from(&[
            (ENV_ADMIN_USERNAME, "manager"),
            (ENV_ADMIN_PASSWORD_SHA256, "not-a-digest"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_ADMIN_PASSWORD_SHA256));
    }

    #[test]
    fn test_credentials_must_come_in_pairs() {
        let err = config_from(&[(ENV_ADMIN_USERNAME, "manager")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::IncompleteCredentials(ENV_ADMIN_USERNAME, ENV_ADMIN_PASSWORD_SHA256)
        );
    }

    #[tokio::test]
    async fn test_configured_admin_account() {
        let digest = sha256_hex("front-desk");
        let config = config_from(&[
            (ENV_ADMIN_USERNAME, "manager"),
            (ENV_ADMIN_PASSWORD_SHA256, digest.as_str()),
        ])
        .unwrap();

        let verifier = config.credential_verifier();
        assert!(verifier.verify("manager", "front-desk").await);
        assert!(!verifier.verify("manager", "1234").await);
    }

    #[tokio::test]
    async fn test_admin_disabled_without_account() {
        let verifier = AppConfig::default().credential_verifier();
        assert!(!verifier.verify("admin", "1234").await);
    }
}
