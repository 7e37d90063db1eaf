//! Path-forwarding proxy subsystem.
//!
//! # Data Flow
//! ```text
//! Browser request: <method> /api-proxy?path=<logical path>
//!     → forward.rs (preflight short-circuit, path check)
//!     → target URL = upstream origin ++ logical path
//!     → upstream call (method + buffered body relayed)
//!     → response mirrored verbatim (status, body, content-type)
//! ```
//!
//! # Design Decisions
//! - The logical path is relayed as-is; the upstream origin is the trust
//!   boundary, not a per-route allowlist
//! - Upstream bodies are never re-parsed, so JSON passes through
//!   byte-for-byte
//! - No retries and no caching: every call is independent

pub mod forward;

pub use forward::forward_request;
