//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the payment provider's shared secret.
/// Takes precedence over `payments.key_secret` in the file.
pub const SECRET_ENV: &str = "RAZORPAY_KEY_SECRET";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: GatewayConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the config file if it exists, otherwise fall back to defaults.
/// Environment overrides and validation apply either way.
pub fn load_or_default(path: &Path) -> Result<GatewayConfig, ConfigError> {
    if path.exists() {
        return load_config(path);
    }

    let mut config = GatewayConfig::default();
    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment variable overrides on top of file values.
fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Ok(secret) = std::env::var(SECRET_ENV) {
        if !secret.is_empty() {
            config.payments.key_secret = secret;
        }
    }
}
