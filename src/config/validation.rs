//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the listener address parses and the upstream origin is usable
//! - Enforce startup preconditions: the payment secret must be present so
//!   the verifier can be constructed, never checked per-request
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.origin '{0}' is not an absolute http(s) URL")]
    UpstreamOrigin(String),

    #[error("upstream.origin must not end with '/' (logical paths carry their own leading slash)")]
    UpstreamTrailingSlash,

    #[error("payments.key_secret is empty; set it in the config file or via RAZORPAY_KEY_SECRET")]
    MissingPaymentSecret,

    #[error("security.max_body_size must be greater than zero")]
    BodyLimitZero,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.origin) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if config.upstream.origin.ends_with('/') {
                errors.push(ValidationError::UpstreamTrailingSlash);
            }
        }
        _ => errors.push(ValidationError::UpstreamOrigin(
            config.upstream.origin.clone(),
        )),
    }

    if config.payments.key_secret.is_empty() {
        errors.push(ValidationError::MissingPaymentSecret);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::BodyLimitZero);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
