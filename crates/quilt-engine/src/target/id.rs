use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TARGET_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a render target.
///
/// Compared by value: geometry and pictures bound to a target carry its id, so
/// ownership checks never touch the target itself and cannot dangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TargetId(u64);

impl TargetId {
    /// Allocates a fresh id. Never returns the same value twice within a process.
    #[inline]
    pub fn next() -> Self {
        Self(NEXT_TARGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target #{}", self.0)
    }
}
