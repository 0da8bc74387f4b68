//! Bounded persisted collections for Vitrine.
//!
//! Small, capped client-side stores over an injected [`StorageBackend`]:
//!
//! - **Wishlist**: up to 50 handles, FIFO eviction of the oldest
//! - **RecentlyViewed**: up to 12 handles, most-recent-first with
//!   de-duplication by moving an existing handle to the front
//! - **Consent**: analytics / marketing / preferences flags gating an
//!   allow-listed activation registry
//!
//! Each store is constructed once per page session, owns one namespaced
//! key, and persists after every mutation.

pub mod backend;
pub mod consent;
pub mod error;
pub mod recently_viewed;
pub mod wishlist;

pub use backend::{MemoryStore, StorageBackend};
pub use consent::{ConsentCategory, ConsentService, ConsentState};
pub use error::StoreError;
pub use recently_viewed::RecentlyViewed;
pub use wishlist::Wishlist;
