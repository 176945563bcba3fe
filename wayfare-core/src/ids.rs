//! Millisecond-timestamp ids for trips, costs, itinerary items and ideas.

use chrono::Utc;

/// Hands out ids based on the current time in milliseconds.
///
/// Ids are strictly increasing: when two requests land in the same
/// millisecond (or the clock goes backwards) the next id is `last + 1`,
/// saturating at `i64::MAX`.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above every id already in use.
    pub fn above<I: IntoIterator<Item = i64>>(existing: I) -> Self {
        IdGenerator {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let issued: Vec<i64> = (0..100).map(|_| ids.next_id()).collect();
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_above_skips_existing_ids() {
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        let mut ids = IdGenerator::above([1, far_future, 5]);
        assert_eq!(ids.next_id(), far_future + 1);
    }

    #[test]
    fn test_max_id_does_not_overflow() {
        let mut ids = IdGenerator::above([i64::MAX]);
        assert_eq!(ids.next_id(), i64::MAX);
    }
}
