//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init observability → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or programmatic trigger → stop accepting → drain → exit
//! ```
//!
//! Both handlers are stateless, so draining in-flight requests is the only
//! shutdown work; there is nothing to flush or roll back.

pub mod shutdown;

pub use shutdown::Shutdown;
