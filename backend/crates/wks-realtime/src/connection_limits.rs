use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Server-wide cap on open sockets, anonymous ones included
#[derive(Debug, Clone)]
pub struct ConnectionLimits {
    max_total: usize,
    open: Arc<AtomicUsize>,
}

/// Reservation of one socket; released on drop
#[derive(Debug)]
pub struct ConnectionSlot {
    open: Arc<AtomicUsize>,
}

impl ConnectionLimits {
    pub fn new(max_total: usize) -> Self {
        Self {
            max_total,
            open: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Reserve a slot, or `None` when the cap is reached
    pub fn try_acquire(&self) -> Option<ConnectionSlot> {
        self.open
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |open| {
                (open < self.max_total).then_some(open + 1)
            })
            .ok()
            .map(|_| ConnectionSlot {
                open: Arc::clone(&self.open),
            })
    }

    pub fn open_count(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    pub fn max_total(&self) -> usize {
        self.max_total
    }
}

impl Drop for ConnectionSlot {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}
