//! Bounded lookup history
//!
//! Append-only, capped at [`HISTORY_CAPACITY`] entries. The oldest entry is
//! evicted first once the cap is reached.

use crate::category::{Category, classify};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries kept in the history
pub const HISTORY_CAPACITY: usize = 10;

/// A single classified lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    code: u64,
    category: Category,
    /// Milliseconds since the Unix epoch
    timestamp: i64,
}

impl StatusEntry {
    /// Create an entry, deriving the category from the code
    pub fn new(code: u64, timestamp: i64) -> Self {
        Self {
            code,
            category: classify(Some(code)).category,
            timestamp,
        }
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Rolling history of lookups, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    // VecDeque for O(1) pop_front on eviction
    entries: VecDeque<StatusEntry>,
}

impl History {
    /// Append an entry and return the updated history
    ///
    /// Entries are never deduplicated; identical codes accumulate.
    #[must_use]
    pub fn append(mut self, entry: StatusEntry) -> Self {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self
    }

    /// Iterate entries from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &StatusEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&StatusEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a StatusEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, StatusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes(history: &History) -> Vec<u64> {
        history.iter().map(StatusEntry::code).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let history = History::default()
            .append(StatusEntry::new(200, 1))
            .append(StatusEntry::new(404, 2))
            .append(StatusEntry::new(500, 3));

        assert_eq!(codes(&history), vec![200, 404, 500]);
        assert_eq!(history.latest().map(StatusEntry::code), Some(500));
    }

    #[test]
    fn test_never_exceeds_capacity_and_keeps_most_recent() {
        let mut history = History::default();
        for i in 0..25u64 {
            history = history.append(StatusEntry::new(100 + i, i as i64));
            assert!(history.len() <= HISTORY_CAPACITY);
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(codes(&history), (115..125).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let history = History::default()
            .append(StatusEntry::new(404, 10))
            .append(StatusEntry::new(404, 11));

        assert_eq!(history.len(), 2);
        let stamps: Vec<i64> = history.iter().map(StatusEntry::timestamp).collect();
        assert_eq!(stamps, vec![10, 11]);
    }

    #[test]
    fn test_entry_category_follows_code() {
        assert_eq!(StatusEntry::new(302, 0).category(), Category::Redirection);
        assert_eq!(StatusEntry::new(9999, 0).category(), Category::Invalid);
    }

    #[test]
    fn test_eviction_drops_front_only() {
        let mut history = History::default();
        for code in [100, 200, 300, 400, 500, 101, 201, 301, 401, 501] {
            history = history.append(StatusEntry::new(code, 0));
        }
        let history = history.append(StatusEntry::new(999, 0));

        assert_eq!(
            codes(&history),
            vec![200, 300, 400, 500, 101, 201, 301, 401, 501, 999]
        );
    }
}
