//! Onboarding configuration with TOML file support.

use onboard_crypto::{HashingParams, PasswordHasher};
use onboard_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the onboarding orchestrator.
///
/// Can be loaded from a TOML file via [`OnboardingConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Lifetime of a verification token, in seconds.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,

    /// Site the verification link points at.
    #[serde(default = "default_verification_base_url")]
    pub verification_base_url: String,

    /// Path of the verification page under the base URL.
    #[serde(default = "default_verification_path")]
    pub verification_path: String,

    #[serde(default = "default_email_subject")]
    pub email_subject: String,

    /// From-address of verification e-mails.
    #[serde(default = "default_sender_address")]
    pub sender_address: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Argon2id costs. Kept last so it serializes as a trailing table.
    #[serde(default)]
    pub password_hashing: HashingParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_token_ttl_secs() -> u64 {
    3600
}

fn default_verification_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_verification_path() -> String {
    "verify".to_string()
}

fn default_email_subject() -> String {
    "Welcome! Please confirm your e-mail.".to_string()
}

fn default_sender_address() -> String {
    "no-reply@localhost".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl OnboardingConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Reject values the orchestrator cannot run with.
    ///
    /// Hashing costs below the production baseline are allowed but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::Invalid("token_ttl_secs must be positive".into()));
        }
        if self.verification_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "verification_base_url must not be empty".into(),
            ));
        }
        PasswordHasher::new(self.password_hashing)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if !self.password_hashing.meets_baseline() {
            tracing::warn!(
                memory_kib = self.password_hashing.memory_kib,
                iterations = self.password_hashing.iterations,
                parallelism = self.password_hashing.parallelism,
                "password hashing parameters are below the production baseline"
            );
        }
        Ok(())
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), onboard_utils::LoggingError> {
        onboard_utils::init_logging(self.log_format, &self.log_level)
    }
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            token_ttl_secs: default_token_ttl_secs(),
            verification_base_url: default_verification_base_url(),
            verification_path: default_verification_path(),
            email_subject: default_email_subject(),
            sender_address: default_sender_address(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            password_hashing: HashingParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = OnboardingConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = OnboardingConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.token_ttl_secs, config.token_ttl_secs);
        assert_eq!(parsed.password_hashing, config.password_hashing);
        assert_eq!(parsed.log_format, config.log_format);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = OnboardingConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.token_ttl_secs, 3600);
        assert_eq!(config.verification_path, "verify");
        assert_eq!(config.password_hashing.memory_kib, 65536);
        assert_eq!(config.password_hashing.iterations, 3);
        assert_eq!(config.password_hashing.parallelism, 4);
        assert_eq!(config.password_hashing.output_len, 32);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            token_ttl_secs = 600
            verification_base_url = "https://bank.example"
            log_format = "json"

            [password_hashing]
            memory_kib = 1024
        "#;
        let config = OnboardingConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.token_ttl_secs, 600);
        assert_eq!(config.verification_base_url, "https://bank.example");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.password_hashing.memory_kib, 1024);
        assert_eq!(config.password_hashing.iterations, 3); // default
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = OnboardingConfig::from_toml_file("/nonexistent/onboard.toml");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onboard.toml");
        std::fs::write(&path, "token_ttl_secs = 120\n").unwrap();
        let config = OnboardingConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.token_ttl_secs, 120);
    }

    #[test]
    fn validate_rejects_unusable_values() {
        let zero_ttl = OnboardingConfig {
            token_ttl_secs: 0,
            ..OnboardingConfig::default()
        };
        assert!(matches!(zero_ttl.validate(), Err(ConfigError::Invalid(_))));

        let mut bad_hashing = OnboardingConfig::default();
        bad_hashing.password_hashing.parallelism = 0;
        assert!(matches!(bad_hashing.validate(), Err(ConfigError::Invalid(_))));

        assert!(OnboardingConfig::default().validate().is_ok());
    }
}
