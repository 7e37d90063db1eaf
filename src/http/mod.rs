//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → cors.rs (permissive headers on every response, preflight)
//!     → request.rs (request ID generation)
//!     → [proxy / payments handler]
//!     → response.rs (structured JSON error bodies)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod response;
pub mod server;

pub use request::MakeRequestUuid;
pub use server::{AppState, HttpServer};
