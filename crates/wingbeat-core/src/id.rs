//! Stable particle identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique IDs
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// An opaque handle to a live butterfly.
///
/// Handles are never reused; a completed butterfly's id simply stops
/// resolving. Overlay implementations key their visual nodes by this.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButterflyId(pub u64);

impl ButterflyId {
    /// Create a new unique ButterflyId
    pub fn new() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a ButterflyId from a raw value (for testing)
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for ButterflyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ButterflyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ButterflyId({})", self.0)
    }
}

impl fmt::Display for ButterflyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation() {
        let id1 = ButterflyId::new();
        let id2 = ButterflyId::new();
        assert_ne!(id1, id2);
        assert!(id2.0 > id1.0);
    }

    #[test]
    fn test_from_raw() {
        let id = ButterflyId::from_raw(42);
        assert_eq!(id.raw(), 42);
    }
}
