//! The payment verification handler.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::http::cors;
use crate::http::response::json_error;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::payments::types::{PaymentCallback, VerifiedPayment};

/// Verify a payment callback.
///
/// Two terminal outcomes: Verified (200) or Rejected (400). A mismatch is
/// a normal negative result; only malformed input reaches the 500 path.
/// Re-submitting a valid callback verifies again; there is no single-use
/// protection here.
pub async fn verify_payment(State(state): State<AppState>, request: Request<Body>) -> Response {
    if request.method() == Method::OPTIONS {
        return cors::preflight();
    }

    let start_time = Instant::now();
    let method = request.method().clone();

    let response = handle_callback(&state, request).await;

    metrics::record_request(
        "verify-payment",
        method.as_str(),
        response.status().as_u16(),
        start_time,
    );
    response
}

async fn handle_callback(state: &AppState, request: Request<Body>) -> Response {
    let body = match axum::body::to_bytes(request.into_body(), state.max_body_size).await {
        Ok(body) => body,
        Err(e) => {
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    // A body that is not the expected JSON shape is an unexpected failure,
    // not a negative verification result.
    let callback: PaymentCallback = match serde_json::from_slice(&body) {
        Ok(callback) => callback,
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable payment callback");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    // Completeness first: no HMAC work for an incomplete callback.
    let Some((order_id, payment_id, signature)) = callback.fields() else {
        return json_error(
            StatusCode::BAD_REQUEST,
            "Missing payment verification parameters",
        );
    };

    if !state.verifier.verify(order_id, payment_id, signature) {
        tracing::warn!(payment_id = %payment_id, "Payment signature verification failed");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "verified": false,
                "error": "Invalid payment signature",
            })),
        )
            .into_response();
    }

    tracing::info!(order_id = %order_id, payment_id = %payment_id, "Payment verified");

    // Best-effort record; the response does not depend on it.
    state
        .store
        .record(VerifiedPayment::new(order_id, payment_id));

    (
        StatusCode::OK,
        Json(json!({
            "verified": true,
            "orderId": order_id,
            "paymentId": payment_id,
        })),
    )
        .into_response()
}
