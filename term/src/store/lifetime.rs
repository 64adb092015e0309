//! Cancellation scoped to the lifetime of a mounted view.
//!
//! Every navigation ends the current lifetime and starts a new one. Work
//! started on behalf of a view carries the lifetime it was started under, so
//! results that resolve after the view is gone can be recognized and dropped.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Monotonic identifier of a view lifetime.
pub type LifetimeId = u64;

/// Token tying asynchronous work to the view that requested it.
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    id: LifetimeId,
    cancelled: Arc<AtomicBool>,
}

impl ViewLifetime {
    /// Creates the first lifetime.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> LifetimeId {
        self.id
    }

    /// Cancels this lifetime and returns its successor.
    pub fn next(&self) -> Self {
        self.cancel();
        Self {
            id: self.id.wrapping_add(1),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Marks this lifetime as ended. Shared by every clone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// two tokens are the same lifetime if they share an id, regardless of
// whether one of them has since been cancelled
impl PartialEq for ViewLifetime {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ViewLifetime {}

#[cfg(test)]
#[path = "./lifetime_tests.rs"]
mod tests;
