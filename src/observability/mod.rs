//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Both handlers produce:
//!     → logging.rs (structured log events, request IDs attached)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; the request ID flows through both hops
//! - Metrics are cheap (atomic increments) and labeled by route and status
//! - The exporter is optional; handlers record unconditionally into the
//!   global recorder, which is a no-op when no exporter is installed

pub mod logging;
pub mod metrics;
