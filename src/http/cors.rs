//! Permissive cross-origin response headers.
//!
//! The dashboard SPA is served from a different origin than the gateway, so
//! every response must carry the CORS header set, failures included. A
//! failure without these headers would be swallowed by the browser as an
//! opaque network error.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Insert the permissive CORS header set into a header map.
pub fn apply(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}

/// Middleware decorating every outgoing response with the CORS header set.
///
/// Installed outermost so responses produced by inner layers (timeouts,
/// body limits) are decorated too.
pub async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    apply(response.headers_mut());
    response
}

/// Response for a CORS preflight: 200, empty body.
///
/// Handlers short-circuit OPTIONS with this before doing any work; the
/// middleware adds the headers on the way out. Preflights are never
/// forwarded upstream.
pub fn preflight() -> Response {
    StatusCode::OK.into_response()
}
