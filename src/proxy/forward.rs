//! The forwarding handler.

use std::time::Instant;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use url::Url;

use crate::http::cors;
use crate::http::response::json_error;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Query parameters accepted by `/api-proxy`.
#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    /// The logical upstream path, e.g. `/api/candidates`.
    pub path: Option<String>,
}

/// Errors raised while relaying a request upstream.
///
/// All of them surface to the caller as a 500 with the error's display
/// text in the body; none escape the handler.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("invalid upstream target: {0}")]
    Target(#[from] url::ParseError),

    #[error("failed to read request body: {0}")]
    Body(axum::Error),

    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

/// Main proxy handler.
///
/// Accepts any method. OPTIONS preflights short-circuit before any other
/// work; a missing or empty `path` is a client error reported before any
/// network call.
pub async fn forward_request(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
    request: Request<Body>,
) -> Response {
    if request.method() == Method::OPTIONS {
        return cors::preflight();
    }

    let start_time = Instant::now();
    let method = request.method().clone();

    let response = match params.path.as_deref().filter(|p| !p.is_empty()) {
        None => json_error(StatusCode::BAD_REQUEST, "Missing path parameter"),
        Some(path) => match forward_upstream(&state, request, path).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(method = %method, path = %path, error = %e, "Proxy request failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        },
    };

    metrics::record_request(
        "api-proxy",
        method.as_str(),
        response.status().as_u16(),
        start_time,
    );
    response
}

/// Relay one request to the upstream origin and mirror the response.
async fn forward_upstream(
    state: &AppState,
    request: Request<Body>,
    path: &str,
) -> Result<Response, ForwardError> {
    let method = request.method().clone();
    let target = target_url(&state.upstream.origin, path)?;

    tracing::debug!(method = %method, target = %target, "Proxying request upstream");

    // The outbound request always claims JSON. The upstream API speaks
    // JSON on every route the dashboard uses; binary payloads would be
    // mis-forwarded and are not part of the contract.
    let mut outbound = state
        .client
        .request(method.clone(), target)
        .header(header::CONTENT_TYPE, "application/json");

    // GET/HEAD never carry a forwarded body, even if the caller sent one.
    if method != Method::GET && method != Method::HEAD {
        let body = axum::body::to_bytes(request.into_body(), state.max_body_size)
            .await
            .map_err(ForwardError::Body)?;
        if !body.is_empty() {
            outbound = outbound.body(body);
        }
    }

    let upstream = outbound.send().await?;

    // Mirror status and content-type; default the latter when absent.
    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    // Body is relayed as raw bytes, never re-parsed.
    let body = upstream.bytes().await?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// Construct the upstream target by concatenating origin and logical path.
fn target_url(origin: &str, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{origin}{path}"))
}
