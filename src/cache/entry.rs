//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age checks.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload together with the moment it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`, saturating at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `interval` at `now`.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is
    /// still live. Only a strictly greater age expires it.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(b"pikachu!".to_vec());

        assert_eq!(entry.value, b"pikachu!");
        assert!(!entry.is_expired_at(Instant::now(), Duration::from_secs(10)));
    }

    #[test]
    fn test_entry_empty_value() {
        let entry = CacheEntry::new(Vec::new());
        assert!(entry.value.is_empty());
    }

    #[test]
    fn test_age_at() {
        let entry = CacheEntry::new(b"x".to_vec());
        let later = entry.created_at + Duration::from_millis(250);

        assert_eq!(entry.age_at(later), Duration::from_millis(250));
    }

    #[test]
    fn test_age_never_negative() {
        let entry = CacheEntry::new(b"x".to_vec());
        let earlier = entry.created_at - Duration::from_millis(1);

        assert_eq!(entry.age_at(earlier), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let interval = Duration::from_millis(50);
        let entry = CacheEntry::new(b"x".to_vec());

        let at_boundary = entry.created_at + interval;
        assert!(
            !entry.is_expired_at(at_boundary, interval),
            "Entry should survive at exactly the interval"
        );

        let past_boundary = at_boundary + Duration::from_millis(1);
        assert!(entry.is_expired_at(past_boundary, interval));
    }
}
