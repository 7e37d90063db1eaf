//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, apply env overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → cloned into server state at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload. Both
//!   handlers are stateless, so a restart is a safe way to change config
//! - All fields have defaults so a minimal (or missing) file works
//! - The payment secret can be supplied via `RAZORPAY_KEY_SECRET`, which
//!   takes precedence over the file
//! - Validation separates syntactic (serde) from semantic checks and
//!   returns all errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::PaymentsConfig;
pub use schema::UpstreamConfig;
