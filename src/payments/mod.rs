//! Payment-callback verification subsystem.
//!
//! # Data Flow
//! ```text
//! Payment widget completes in the browser
//!     → POST /verify-payment {order id, payment id, signature}
//!     → verify.rs (completeness check, then signature recompute)
//!     → signature.rs (HMAC-SHA256 over "<order>|<payment>", constant-time compare)
//!     → store.rs (record verified payment, best-effort)
//! ```
//!
//! # Design Decisions
//! - The shared secret is a startup invariant: the verifier is constructed
//!   with it, so there is no per-request "secret missing" branch
//! - A signature mismatch is a normal negative result (400), never an error
//! - Replays verify again; the store is the extension point if single-use
//!   semantics are ever required

pub mod signature;
pub mod store;
pub mod types;
pub mod verify;

pub use signature::SignatureVerifier;
pub use types::{PaymentCallback, VerifiedPayment};
