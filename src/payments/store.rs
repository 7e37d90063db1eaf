//! Verified payment records.
//!
//! Recording a verified payment is an explicitly best-effort side effect:
//! the verifier's response does not depend on the write. The trait seam
//! exists so a persistent backend (or a replay-rejecting one) can be
//! dropped in without touching the handler.

use std::sync::Arc;

use dashmap::DashMap;

use crate::payments::types::VerifiedPayment;

/// Sink for payments that passed signature verification.
pub trait PaymentStore: Send + Sync {
    /// Record a verified payment. Re-verifying the same payment overwrites
    /// the previous record; it never fails the verification.
    fn record(&self, payment: VerifiedPayment);

    /// Look up a recorded payment by payment ID.
    fn get(&self, payment_id: &str) -> Option<VerifiedPayment>;

    /// Number of distinct recorded payments.
    fn count(&self) -> usize;
}

/// A thread-safe in-memory store, keyed by payment ID.
#[derive(Clone, Default)]
pub struct MemoryPaymentStore {
    inner: Arc<DashMap<String, VerifiedPayment>>,
}

impl PaymentStore for MemoryPaymentStore {
    fn record(&self, payment: VerifiedPayment) {
        self.inner.insert(payment.payment_id.clone(), payment);
    }

    fn get(&self, payment_id: &str) -> Option<VerifiedPayment> {
        self.inner.get(payment_id).map(|r| r.value().clone())
    }

    fn count(&self) -> usize {
        self.inner.len()
    }
}
