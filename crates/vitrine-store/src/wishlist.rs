//! Wishlist: a capped, FIFO-evicting set of product handles.

use crate::backend::{StorageBackend, StorageBackendExt};
use crate::error::StoreError;

/// Maximum number of wishlisted handles.
pub const WISHLIST_CAP: usize = 50;

/// Storage key for the wishlist.
pub const WISHLIST_KEY: &str = "vitrine:wishlist";

/// A bounded, insertion-ordered set of product handles.
///
/// Oldest entries are evicted first once the cap is exceeded. The list is
/// persisted after every mutation; a missing or unreadable stored value
/// starts the session with an empty list.
pub struct Wishlist<S: StorageBackend> {
    backend: S,
    handles: Vec<String>,
}

impl<S: StorageBackend> Wishlist<S> {
    /// Load the wishlist from storage.
    pub fn load(backend: S) -> Result<Self, StoreError> {
        let handles: Vec<String> = backend.get_json(WISHLIST_KEY)?.unwrap_or_default();
        Ok(Self { backend, handles })
    }

    /// Add a handle.
    ///
    /// Returns `false` without touching storage when the handle is already
    /// present. Evicts the oldest entries once the cap is exceeded.
    pub fn add(&mut self, handle: impl Into<String>) -> Result<bool, StoreError> {
        let handle = handle.into();
        if self.contains(&handle) {
            return Ok(false);
        }

        self.handles.push(handle);
        while self.handles.len() > WISHLIST_CAP {
            let evicted = self.handles.remove(0);
            tracing::debug!(handle = %evicted, "wishlist over capacity, evicted oldest");
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove a handle. Returns `false` when it was not present.
    pub fn remove(&mut self, handle: &str) -> Result<bool, StoreError> {
        let before = self.handles.len();
        self.handles.retain(|h| h != handle);
        if self.handles.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Toggle a handle: add when absent, remove when present.
    ///
    /// Returns `true` when the handle is present afterwards.
    pub fn toggle(&mut self, handle: impl Into<String>) -> Result<bool, StoreError> {
        let handle = handle.into();
        if self.contains(&handle) {
            self.remove(&handle)?;
            Ok(false)
        } else {
            self.add(handle)?;
            Ok(true)
        }
    }

    /// Check membership.
    pub fn contains(&self, handle: &str) -> bool {
        self.handles.iter().any(|h| h == handle)
    }

    /// Handles in insertion order (oldest first).
    pub fn handles(&self) -> &[String] {
        &self.handles
    }

    /// Number of wishlisted handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.backend.set_json(WISHLIST_KEY, &self.handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::load(MemoryStore::new()).unwrap();

        assert!(wishlist.add("blue-shirt").unwrap());
        assert!(!wishlist.add("blue-shirt").unwrap());
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut wishlist = Wishlist::load(MemoryStore::new()).unwrap();

        for i in 0..WISHLIST_CAP {
            assert!(wishlist.add(format!("product-{}", i)).unwrap());
        }
        assert_eq!(wishlist.len(), WISHLIST_CAP);

        // The 51st distinct handle evicts product-0.
        assert!(wishlist.add("product-extra").unwrap());
        assert_eq!(wishlist.len(), WISHLIST_CAP);
        assert!(!wishlist.contains("product-0"));
        assert!(wishlist.contains("product-1"));
        assert!(wishlist.contains("product-extra"));
    }

    #[test]
    fn test_remove_and_toggle() {
        let mut wishlist = Wishlist::load(MemoryStore::new()).unwrap();
        wishlist.add("a").unwrap();

        assert!(wishlist.remove("a").unwrap());
        assert!(!wishlist.remove("a").unwrap());

        assert!(wishlist.toggle("a").unwrap());
        assert!(!wishlist.toggle("a").unwrap());
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_persists_across_loads() {
        let store = MemoryStore::new();
        {
            let mut wishlist = Wishlist::load(&store).unwrap();
            wishlist.add("a").unwrap();
            wishlist.add("b").unwrap();
        }

        let wishlist = Wishlist::load(&store).unwrap();
        assert_eq!(wishlist.handles(), ["a", "b"]);
    }
}
