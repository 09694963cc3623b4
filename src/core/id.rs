/*!
 * ID Generation
 * Counters for notification/subscription ids and time-based instance ids
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::types::{now_millis, InstanceId, Timestamp};

// ============================================================================
// ID Generator Trait
// ============================================================================

/// Generic ID generator interface
pub trait IdGenerator<T> {
    /// Generate next ID
    fn next(&self) -> T;

    /// Get current counter value (for debugging)
    fn current(&self) -> T;
}

// ============================================================================
// Atomic Counter Generator
// ============================================================================

/// Lock-free monotonically increasing counter
///
/// Clones share the same counter.
#[derive(Debug, Clone)]
pub struct AtomicGenerator {
    counter: Arc<AtomicU64>,
}

impl AtomicGenerator {
    /// Create new generator starting at given value
    #[inline]
    pub fn new(start: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(start)),
        }
    }
}

impl Default for AtomicGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator<u64> for AtomicGenerator {
    #[inline]
    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    #[inline]
    fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Timestamp Generator
// ============================================================================

/// Millisecond timestamps that never repeat
///
/// Two calls inside the same millisecond get consecutive values, so ids built
/// from them stay unique.
#[derive(Debug, Clone, Default)]
pub struct TimestampGenerator {
    last: Arc<AtomicU64>,
}

impl TimestampGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a unique instance id for a multi-instance app
    pub fn instance_id(&self, app_id: &str) -> InstanceId {
        InstanceId::new(format!("{}-{}", app_id, self.next()))
    }
}

impl IdGenerator<Timestamp> for TimestampGenerator {
    fn next(&self) -> Timestamp {
        let now = now_millis();
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    fn current(&self) -> Timestamp {
        self.last.load(Ordering::Relaxed)
    }
}
