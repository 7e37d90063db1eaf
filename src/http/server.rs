//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the two gateway handlers
//! - Wire up middleware (CORS, request ID, tracing, timeout, body limit)
//! - Share the upstream client, signature verifier and payment store
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer, ServiceBuilderExt,
};

use crate::config::{GatewayConfig, UpstreamConfig};
use crate::http::cors;
use crate::http::request::MakeRequestUuid;
use crate::lifecycle::shutdown;
use crate::payments::signature::SignatureVerifier;
use crate::payments::store::{MemoryPaymentStore, PaymentStore};
use crate::payments::verify::verify_payment;
use crate::proxy::forward::forward_request;

/// Application state injected into handlers.
///
/// Everything here is read-only or internally synchronized; handlers never
/// coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream hop. Connection pooling is internal to reqwest.
    pub client: reqwest::Client,
    /// The fixed upstream origin.
    pub upstream: UpstreamConfig,
    /// Payment signature verifier, constructed once with the shared secret.
    pub verifier: Arc<SignatureVerifier>,
    /// Record of verified payments (best-effort side effect).
    pub store: Arc<dyn PaymentStore>,
    /// Cap applied when buffering inbound bodies.
    pub max_body_size: usize,
}

/// HTTP server for the edge gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The signature verifier is built here, from the configured secret.
    /// Config validation guarantees the secret is present, so a constructed
    /// server can always verify; there is no per-request "secret missing"
    /// branch.
    pub fn new(config: GatewayConfig) -> Self {
        let verifier = Arc::new(SignatureVerifier::new(&config.payments.key_secret));
        let store: Arc<dyn PaymentStore> = Arc::new(MemoryPaymentStore::default());

        let state = AppState {
            client: reqwest::Client::new(),
            upstream: config.upstream.clone(),
            verifier,
            store,
            max_body_size: config.security.max_body_size,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api-proxy", any(forward_request))
            .route("/verify-payment", any(verify_payment))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .set_x_request_id(MakeRequestUuid)
                    .layer(TraceLayer::new_for_http())
                    .propagate_x_request_id()
                    .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
            // Outermost: every response, including those synthesized by the
            // layers above, leaves with the CORS header set.
            .layer(axum::middleware::from_fn(cors::cors_middleware))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::shutdown_signal(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
