//! In-memory store of shortened URLs, keyed by slug

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::trace;

use super::models::UrlRecord;

/// Process-lifetime map of slug → [`UrlRecord`].
///
/// Built once at startup and shared through an `Arc`. Records are never
/// evicted. Each entry sits behind its shard lock, so visit increments do
/// not lose updates and owner scans never observe a half-written record.
#[derive(Default)]
pub struct RecordStore {
    records: DashMap<String, UrlRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Insert or replace the record stored under its slug (last write wins).
    pub fn add(&self, record: UrlRecord) {
        let slug = record.slug().to_string();
        if self.records.insert(slug, record).is_some() {
            trace!("RecordStore: replaced existing record");
        }
    }

    /// Insert only when the slug is free. Returns the record back if taken.
    pub fn insert_if_absent(&self, record: UrlRecord) -> Result<(), UrlRecord> {
        match self.records.entry(record.slug().to_string()) {
            Entry::Occupied(_) => Err(record),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    pub fn get(&self, slug: &str) -> Option<UrlRecord> {
        if slug.is_empty() {
            return None;
        }
        self.records.get(slug).map(|entry| entry.value().clone())
    }

    /// All records created by `owner`, in no particular order.
    pub fn by_owner(&self, owner: &str) -> Vec<UrlRecord> {
        if owner.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|entry| entry.owner == owner)
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Count a visit and return the updated record.
    ///
    /// Lookup and increment happen under the same entry lock.
    pub fn record_visit(&self, slug: &str) -> Option<UrlRecord> {
        if slug.is_empty() {
            return None;
        }
        let mut entry = self.records.get_mut(slug)?;
        entry.increment_visits();
        Some(entry.value().clone())
    }

    /// Sum of visits across every record.
    pub fn total_visits(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.visits))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, owner: &str) -> UrlRecord {
        UrlRecord::new("https://example.com", slug, owner).unwrap()
    }

    #[test]
    fn test_add_then_get() {
        let store = RecordStore::new();
        let r = record("abc123", "alice");
        store.add(r.clone());

        let got = store.get("abc123").expect("record should exist");
        assert_eq!(got, r);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_and_empty() {
        let store = RecordStore::new();
        store.add(record("abc123", "alice"));

        assert!(store.get("nonexistent").is_none());
        assert!(store.get("").is_none());
    }

    #[test]
    fn test_add_overwrites_same_slug() {
        let store = RecordStore::new();
        store.add(record("dup", "alice"));
        store.add(UrlRecord::new("https://other.example", "dup", "bob").unwrap());

        let got = store.get("dup").unwrap();
        assert_eq!(got.owner, "bob");
        assert_eq!(got.original_url, "https://other.example");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_if_absent_keeps_first() {
        let store = RecordStore::new();
        assert!(store.insert_if_absent(record("taken", "alice")).is_ok());

        let rejected = store
            .insert_if_absent(record("taken", "bob"))
            .unwrap_err();
        assert_eq!(rejected.owner, "bob");
        assert_eq!(store.get("taken").unwrap().owner, "alice");
    }

    #[test]
    fn test_by_owner_filters() {
        let store = RecordStore::new();
        store.add(record("a1", "alice"));
        store.add(record("a2", "alice"));
        store.add(record("b1", "bob"));

        let mut alice: Vec<String> = store
            .by_owner("alice")
            .into_iter()
            .map(|r| r.slug().to_string())
            .collect();
        alice.sort();
        assert_eq!(alice, vec!["a1", "a2"]);

        assert!(store.by_owner("carol").is_empty());
        assert!(store.by_owner("").is_empty());
    }

    #[test]
    fn test_record_visit_increments() {
        let store = RecordStore::new();
        store.add(record("abc123", "alice"));

        for _ in 0..3 {
            store.record_visit("abc123");
        }
        assert_eq!(store.get("abc123").unwrap().visits, 3);
        assert!(store.record_visit("missing").is_none());
        assert!(store.record_visit("").is_none());
    }

    #[test]
    fn test_get_returns_snapshot() {
        let store = RecordStore::new();
        store.add(record("abc123", "alice"));

        let mut snapshot = store.get("abc123").unwrap();
        snapshot.increment_visits();
        assert_eq!(store.get("abc123").unwrap().visits, 0);
    }

    #[test]
    fn test_total_visits_sums_records() {
        let store = RecordStore::new();
        store.add(record("a", "alice"));
        store.add(record("b", "bob"));
        store.record_visit("a");
        store.record_visit("a");
        store.record_visit("b");

        assert_eq!(store.total_visits(), 3);
    }
}
