//! In-memory search result cache
//!
//! Keyed by the exact query text. No case folding or trimming: "Cafe" and
//! "cafe" are separate entries. Entries live until `clear` or drop.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::navigation::Place;

/// Query text to ordered results
#[derive(Clone, Debug, Default)]
pub struct SearchCache {
    entries: BTreeMap<String, Vec<Place>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached results for exactly `query`
    pub fn get(&self, query: &str) -> Option<&[Place]> {
        self.entries.get(query).map(Vec::as_slice)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    /// Store results for `query`, replacing any earlier entry
    pub fn insert(&mut self, query: impl Into<String>, places: Vec<Place>) {
        self.entries.insert(query.into(), places);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Coordinate, PlaceId};
    use alloc::vec;

    fn place(id: &str) -> Place {
        Place::new(PlaceId::new(id), id, "", Coordinate::new(35.0, 139.0))
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = SearchCache::new();
        assert!(cache.get("ramen").is_none());

        cache.insert("ramen", vec![place("a"), place("b")]);
        let hit = cache.get("ramen").unwrap();
        assert_eq!(hit.len(), 2);
        assert_eq!(hit[0].id.as_str(), "a");
        assert_eq!(hit[1].id.as_str(), "b");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut cache = SearchCache::new();
        cache.insert("Cafe", vec![place("x")]);
        assert!(cache.contains("Cafe"));
        assert!(!cache.contains("cafe"));
        assert!(!cache.contains("Cafe "));
    }

    #[test]
    fn test_empty_results_are_cached() {
        let mut cache = SearchCache::new();
        cache.insert("nowhere", Vec::new());
        assert_eq!(cache.get("nowhere").map(<[Place]>::len), Some(0));
    }

    #[test]
    fn test_insert_replaces_and_clear_empties() {
        let mut cache = SearchCache::new();
        cache.insert("q", vec![place("old")]);
        cache.insert("q", vec![place("new")]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("q").unwrap()[0].id.as_str(), "new");

        cache.clear();
        assert!(cache.is_empty());
    }
}
