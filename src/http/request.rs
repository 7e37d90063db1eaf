//! Request ID generation.
//!
//! Every inbound request gets a UUID v4 `x-request-id` as early as possible
//! so log lines for the two hops (inbound, upstream) can be correlated. The
//! ID is propagated onto the response by `tower-http`'s propagate layer.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Generates a fresh UUID v4 for each request.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
