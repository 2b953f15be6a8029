//! Per-section published state
//!
//! Each site section owns a [`SectionCell`] holding the record list the
//! renderer reads. Hydrate cycles can overlap: a language switch launches a
//! new cycle while the previous fetch is still in flight. Every cycle draws
//! a monotonically increasing generation when it begins and may only commit
//! while it is still the newest. A cycle that resolves late is discarded,
//! never published over fresher content.

use crate::content::Record;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Where a published record list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Parsed from a successfully fetched document
    Live,

    /// The fixed built-in fallback list
    Fallback,
}

impl ContentOrigin {
    /// String representation for logs and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ContentOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The record list a completed hydrate cycle published
#[derive(Debug, Clone)]
pub struct PublishedList {
    /// The records the section renders
    pub records: Vec<Record>,

    /// Whether the records are live content or the fallback
    pub origin: ContentOrigin,

    /// The generation of the cycle that committed this list
    pub generation: u64,

    /// When the list was committed
    pub refreshed_at: DateTime<Utc>,
}

/// Holder of one section's published record list
#[derive(Debug, Default)]
pub struct SectionCell {
    latest: AtomicU64,
    published: Mutex<Option<PublishedList>>,
}

impl SectionCell {
    /// Creates an empty cell with nothing published
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a hydrate cycle and returns its generation
    ///
    /// The returned generation is newer than every generation handed out
    /// before it; beginning a cycle immediately stales all earlier ones.
    pub fn begin_cycle(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The newest generation handed out so far
    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Publishes a cycle's result if the cycle is still the newest
    ///
    /// The previous list is fully replaced; there is no merge. Returns
    /// false (and publishes nothing) if a newer cycle has begun, or if a
    /// newer cycle already committed.
    pub fn commit(&self, generation: u64, records: Vec<Record>, origin: ContentOrigin) -> bool {
        let mut published = self.published.lock().unwrap();

        if generation != self.latest.load(Ordering::SeqCst) {
            return false;
        }

        if let Some(current) = published.as_ref() {
            if current.generation >= generation {
                return false;
            }
        }

        *published = Some(PublishedList {
            records,
            origin,
            generation,
            refreshed_at: Utc::now(),
        });

        true
    }

    /// Returns a snapshot of the currently published list, if any
    pub fn snapshot(&self) -> Option<PublishedList> {
        self.published.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(id: i64) -> Vec<Record> {
        vec![Record::new(id)]
    }

    #[test]
    fn test_generations_increase() {
        let cell = SectionCell::new();
        let first = cell.begin_cycle();
        let second = cell.begin_cycle();
        assert!(second > first);
        assert_eq!(cell.latest_generation(), second);
    }

    #[test]
    fn test_commit_latest_generation() {
        let cell = SectionCell::new();
        let generation = cell.begin_cycle();

        assert!(cell.commit(generation, records(1), ContentOrigin::Live));

        let published = cell.snapshot().unwrap();
        assert_eq!(published.records[0].id(), 1);
        assert_eq!(published.origin, ContentOrigin::Live);
        assert_eq!(published.generation, generation);
    }

    #[test]
    fn test_stale_cycle_discarded() {
        let cell = SectionCell::new();
        let stale = cell.begin_cycle();
        let fresh = cell.begin_cycle();

        // The newer cycle commits first
        assert!(cell.commit(fresh, records(2), ContentOrigin::Live));

        // The older cycle resolves late and must be discarded
        assert!(!cell.commit(stale, records(1), ContentOrigin::Live));

        let published = cell.snapshot().unwrap();
        assert_eq!(published.records[0].id(), 2);
    }

    #[test]
    fn test_stale_cycle_discarded_even_before_fresh_commit() {
        let cell = SectionCell::new();
        let stale = cell.begin_cycle();
        let _fresh = cell.begin_cycle();

        // A newer cycle has begun; the older result may not publish
        assert!(!cell.commit(stale, records(1), ContentOrigin::Live));
        assert!(cell.snapshot().is_none());
    }

    #[test]
    fn test_commit_replaces_fully() {
        let cell = SectionCell::new();
        let first = cell.begin_cycle();
        assert!(cell.commit(first, records(1), ContentOrigin::Fallback));

        let second = cell.begin_cycle();
        assert!(cell.commit(second, records(2), ContentOrigin::Live));

        let published = cell.snapshot().unwrap();
        assert_eq!(published.records.len(), 1);
        assert_eq!(published.records[0].id(), 2);
        assert_eq!(published.origin, ContentOrigin::Live);
    }

    #[test]
    fn test_empty_cell_has_no_snapshot() {
        let cell = SectionCell::new();
        assert!(cell.snapshot().is_none());
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(format!("{}", ContentOrigin::Live), "live");
        assert_eq!(format!("{}", ContentOrigin::Fallback), "fallback");
    }
}
