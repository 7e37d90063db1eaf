//! Edge Gateway for the recruitment dashboard.
//!
//! Two stateless HTTP endpoints sit between the browser client and the
//! systems it cannot reach directly:
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 EDGE GATEWAY                 │
//!                        │                                              │
//!   Browser ─────────────┼─▶ /api-proxy ───────▶ proxy::forward ───────┼──▶ Upstream API
//!   (dashboard SPA)      │        │              (relay method/body,    │    (fixed origin)
//!                        │        │               mirror status/body)   │
//!                        │        │                                     │
//!                        ├─▶ /verify-payment ──▶ payments::verify ──────┤
//!                        │                       (HMAC-SHA256 over      │
//!                        │                        order|payment ids)    │
//!                        │                                              │
//!                        │  ┌────────────────────────────────────────┐  │
//!                        │  │          Cross-Cutting Concerns        │  │
//!                        │  │   config │ observability │ lifecycle   │  │
//!                        │  └────────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! Both handlers are pure request → response functions: no shared mutable
//! state, no ordering between calls. Every response, success or failure,
//! carries the permissive CORS header set so the browser caller can always
//! observe the outcome instead of seeing an opaque network error.

// Core subsystems
pub mod config;
pub mod http;
pub mod payments;
pub mod proxy;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
