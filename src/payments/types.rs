//! Payment verification types.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// The callback body posted by the client after the payment widget completes.
///
/// Field names follow the payment provider's callback convention. Every
/// field is optional at the parse boundary so that an incomplete callback
/// becomes a structured 400, not a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentCallback {
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_signature: Option<String>,
}

impl PaymentCallback {
    /// All three fields, if each is present and non-empty.
    ///
    /// An empty string counts as missing, matching the widget's behavior of
    /// omitting fields it has no value for.
    pub fn fields(&self) -> Option<(&str, &str, &str)> {
        let order_id = non_empty(&self.razorpay_order_id)?;
        let payment_id = non_empty(&self.razorpay_payment_id)?;
        let signature = non_empty(&self.razorpay_signature)?;
        Some((order_id, payment_id, signature))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A payment that passed signature verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedPayment {
    /// The provider's order identifier.
    pub order_id: String,
    /// The provider's payment identifier.
    pub payment_id: String,
    /// When verification happened (seconds since epoch).
    pub verified_at: u64,
}

impl VerifiedPayment {
    pub fn new(order_id: &str, payment_id: &str) -> Self {
        let verified_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self {
            order_id: order_id.to_string(),
            payment_id: payment_id.to_string(),
            verified_at,
        }
    }
}
