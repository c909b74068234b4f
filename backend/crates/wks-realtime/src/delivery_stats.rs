use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Process-wide delivery and drop counters of the best-effort fan-out.
#[derive(Debug, Clone, Default)]
pub struct DeliveryStats {
    inner: Arc<StatsInner>,
}

#[derive(Debug, Default)]
struct StatsInner {
    delivered: AtomicU64,
    dropped_queue_full: AtomicU64,
    dropped_closed: AtomicU64,
}

/// Point-in-time copy of [`DeliveryStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySnapshot {
    pub delivered: u64,
    pub dropped_queue_full: u64,
    pub dropped_closed: u64,
}

/// Outcome of one fan-out call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    /// Connections an event was pushed to
    pub attempted: usize,
    pub delivered: usize,
    pub dropped: usize,
}

impl DeliveryStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_delivered(&self) {
        self.inner.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_queue_full(&self) {
        self.inner.dropped_queue_full.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_closed(&self) {
        self.inner.dropped_closed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DeliverySnapshot {
        DeliverySnapshot {
            delivered: self.inner.delivered.load(Ordering::Relaxed),
            dropped_queue_full: self.inner.dropped_queue_full.load(Ordering::Relaxed),
            dropped_closed: self.inner.dropped_closed.load(Ordering::Relaxed),
        }
    }
}

impl DeliverySnapshot {
    pub fn dropped(&self) -> u64 {
        self.dropped_queue_full + self.dropped_closed
    }
}
