//! Payment signature recomputation and comparison.
//!
//! The payment provider signs `"<order_id>|<payment_id>"` with a shared
//! secret using HMAC-SHA256 and hands the browser a lowercase hex digest.
//! Authenticity is decided by recomputing that digest and comparing it to
//! the claimed one in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifier bound to one shared secret for the life of the process.
pub struct SignatureVerifier {
    key: Vec<u8>,
}

impl SignatureVerifier {
    /// Build a verifier from the provider's shared secret.
    ///
    /// Config validation rejects an empty secret before this runs.
    pub fn new(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    /// Check a claimed signature against `"<order_id>|<payment_id>"`.
    ///
    /// Claims that are not valid hex, or not digest-sized, are rejected
    /// without becoming errors. Comparison is constant-time over the
    /// decoded bytes, not string equality over the hex encoding.
    pub fn verify(&self, order_id: &str, payment_id: &str, claimed: &str) -> bool {
        let Ok(expected) = hex::decode(claimed) else {
            return false;
        };

        let Ok(mut mac) = HmacSha256::new_from_slice(&self.key) else {
            return false;
        };

        mac.update(canonical_message(order_id, payment_id).as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}

/// The exact byte sequence the provider signs: pipe-joined, case-sensitive,
/// no trimming.
fn canonical_message(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}|{payment_id}")
}
