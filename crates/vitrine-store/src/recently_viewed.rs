//! Recently-viewed products: a capped, most-recent-first list.

use crate::backend::{StorageBackend, StorageBackendExt};
use crate::error::StoreError;

/// Maximum number of tracked handles.
pub const RECENTLY_VIEWED_CAP: usize = 12;

/// Storage key for the recently-viewed list.
pub const RECENTLY_VIEWED_KEY: &str = "vitrine:recently-viewed";

/// Most-recent-first list of product handles.
///
/// Recording a handle that is already present moves it to the front
/// without duplicating it; the list never exceeds the cap.
pub struct RecentlyViewed<S: StorageBackend> {
    backend: S,
    handles: Vec<String>,
}

impl<S: StorageBackend> RecentlyViewed<S> {
    /// Load the list from storage.
    pub fn load(backend: S) -> Result<Self, StoreError> {
        let handles: Vec<String> = backend.get_json(RECENTLY_VIEWED_KEY)?.unwrap_or_default();
        Ok(Self { backend, handles })
    }

    /// Record a product view, moving the handle to the front.
    pub fn record(&mut self, handle: impl Into<String>) -> Result<(), StoreError> {
        let handle = handle.into();
        self.handles.retain(|h| h != &handle);
        self.handles.insert(0, handle);
        self.handles.truncate(RECENTLY_VIEWED_CAP);
        self.persist()
    }

    /// Handles, most recent first.
    pub fn handles(&self) -> &[String] {
        &self.handles
    }

    /// Handles other than the given one (for "you also viewed" rails on
    /// the product page itself).
    pub fn handles_excluding<'a>(&'a self, current: &'a str) -> impl Iterator<Item = &'a str> {
        self.handles
            .iter()
            .map(String::as_str)
            .filter(move |h| *h != current)
    }

    /// Number of tracked handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if nothing has been tracked.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.backend.set_json(RECENTLY_VIEWED_KEY, &self.handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    #[test]
    fn test_record_is_most_recent_first() {
        let mut viewed = RecentlyViewed::load(MemoryStore::new()).unwrap();
        viewed.record("a").unwrap();
        viewed.record("b").unwrap();
        viewed.record("c").unwrap();

        assert_eq!(viewed.handles(), ["c", "b", "a"]);
    }

    #[test]
    fn test_record_existing_moves_to_front_without_duplicating() {
        let mut viewed = RecentlyViewed::load(MemoryStore::new()).unwrap();
        viewed.record("a").unwrap();
        viewed.record("b").unwrap();
        viewed.record("c").unwrap();

        viewed.record("a").unwrap();
        assert_eq!(viewed.handles(), ["a", "c", "b"]);
        assert_eq!(viewed.len(), 3);
    }

    #[test]
    fn test_cap_drops_least_recent() {
        let mut viewed = RecentlyViewed::load(MemoryStore::new()).unwrap();
        for i in 0..=RECENTLY_VIEWED_CAP {
            viewed.record(format!("product-{}", i)).unwrap();
        }

        assert_eq!(viewed.len(), RECENTLY_VIEWED_CAP);
        assert!(!viewed.handles().contains(&"product-0".to_string()));
        assert_eq!(viewed.handles()[0], format!("product-{}", RECENTLY_VIEWED_CAP));
    }

    #[test]
    fn test_excluding_current_product() {
        let mut viewed = RecentlyViewed::load(MemoryStore::new()).unwrap();
        viewed.record("a").unwrap();
        viewed.record("b").unwrap();

        let rail: Vec<&str> = viewed.handles_excluding("b").collect();
        assert_eq!(rail, ["a"]);
    }

    #[test]
    fn test_persists_across_loads() {
        let store = MemoryStore::new();
        {
            let mut viewed = RecentlyViewed::load(&store).unwrap();
            viewed.record("a").unwrap();
            viewed.record("b").unwrap();
        }

        let viewed = RecentlyViewed::load(&store).unwrap();
        assert_eq!(viewed.handles(), ["b", "a"]);
    }
}
