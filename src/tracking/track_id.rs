//! Monotonic track identifier source.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counter handing out track identifiers, starting at 1.
///
/// Clones share the same counter. A [`crate::TrackingSession`] keeps one
/// allocator for its whole life and passes it to every tracker it builds, so
/// a re-configure discards track history without reissuing old identifiers.
#[derive(Debug, Clone, Default)]
pub struct TrackIdAllocator {
    last: Arc<AtomicU64>,
}

impl TrackIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the next unique track ID.
    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Most recently issued ID, 0 if none.
    pub fn last_issued(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}
