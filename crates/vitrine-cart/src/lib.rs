//! Remote cart synchronization for Vitrine.
//!
//! The remote platform owns the cart; this crate keeps a local rendered
//! view consistent with it. [`CartSyncController`] serializes add, change
//! and remove operations against the narrow [`CartBackend`] port and
//! reconciles by re-fetching the rendered fragment and item count after
//! every mutation — last write observed via full refresh, never
//! incremental diffing.
//!
//! Concurrency contract: quantity mutations for the *same* line key are
//! serialized; mutations for different keys may complete in any order and
//! are reconciled by the trailing refresh.

pub mod controller;
pub mod error;
pub mod port;
pub mod view;

pub use controller::{CartSyncController, DrawerState};
pub use error::CartError;
pub use port::{AddLineRequest, CartBackend, CartFragment, CartSummary, RenderedLine};
pub use view::CartView;
