//! Cart synchronization controller.
//!
//! One instance per page session. Owns the drawer open/closed state, the
//! current [`CartView`] and a per-line lock table that serializes quantity
//! mutations for the same line key. Everything remote goes through the
//! [`CartBackend`] port; the remote cart is the source of truth and the
//! view is re-fetched wholesale after every mutation.

use crate::error::CartError;
use crate::port::{AddLineRequest, CartBackend};
use crate::view::CartView;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex, MutexGuard};
use tokio::sync::Mutex as AsyncMutex;
use vitrine_core::LineKey;

/// Drawer state for the controller instance.
///
/// Opening always forces a refresh; a failed refresh leaves the drawer
/// open over stale content rather than reverting it. Closing is always
/// permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawerState::Closed => "closed",
            DrawerState::Open => "open",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }
}

/// Serializes cart mutations and reconciles the local view.
pub struct CartSyncController<B: CartBackend> {
    backend: B,
    view: StdMutex<CartView>,
    drawer: StdMutex<DrawerState>,
    /// Add-to-cart control state; held only while one submission is in flight.
    submitting: AtomicBool,
    /// One async lock per line key seen so far.
    line_locks: StdMutex<HashMap<LineKey, Arc<AsyncMutex<()>>>>,
}

impl<B: CartBackend> CartSyncController<B> {
    /// Create a controller over a backend, with an empty view and the
    /// drawer closed.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            view: StdMutex::new(CartView::default()),
            drawer: StdMutex::new(DrawerState::Closed),
            submitting: AtomicBool::new(false),
            line_locks: StdMutex::new(HashMap::new()),
        }
    }

    /// Current drawer state.
    pub fn drawer(&self) -> DrawerState {
        *lock(&self.drawer)
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> CartView {
        lock(&self.view).clone()
    }

    /// Item count shown on the count indicators.
    pub fn item_count(&self) -> i64 {
        lock(&self.view).item_count
    }

    /// Open the drawer and refresh before the caller proceeds (the opening
    /// animation and focus step wait on this).
    pub async fn open(&self) {
        *lock(&self.drawer) = DrawerState::Open;
        tracing::debug!("cart drawer opened");
        self.refresh().await;
    }

    /// Close the drawer. Never blocked by in-flight requests.
    pub fn close(&self) {
        *lock(&self.drawer) = DrawerState::Closed;
        tracing::debug!("cart drawer closed");
    }

    /// Submit the product form: add one line to the remote cart.
    ///
    /// The triggering control is disabled for the duration (a concurrent
    /// submit gets [`CartError::Busy`]) and re-enabled unconditionally when
    /// this returns. Success refreshes the view and opens the drawer;
    /// failure leaves the cart state untouched and carries the message to
    /// show via [`CartError::user_message`].
    pub async fn add_line(&self, request: AddLineRequest) -> Result<(), CartError> {
        let _control = SubmitGuard::acquire(&self.submitting).ok_or(CartError::Busy)?;

        self.backend.add_line(&request).await?;
        self.open().await;
        Ok(())
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// Reads the currently *displayed* quantity under the line's lock and
    /// clamps `displayed + delta` at zero; zero carries remove semantics.
    /// Mutations for the same key are serialized — an overlapping call
    /// waits, then resamples the refreshed quantity, so increments are
    /// never lost.
    pub async fn change_quantity(&self, key: &LineKey, delta: i64) -> Result<(), CartError> {
        let line = self.line_lock(key);
        let _serialized = line.lock().await;

        let displayed = lock(&self.view)
            .displayed_quantity(key)
            .ok_or_else(|| CartError::UnknownLine(key.clone()))?;
        let target = (displayed + delta).max(0);
        let target = u32::try_from(target).unwrap_or(u32::MAX);

        self.set_quantity_and_refresh(key, target).await
    }

    /// Remove a line from the remote cart.
    ///
    /// Always refreshes afterward, success or not: a failed removal must
    /// show up as "still present", never linger as a phantom removed row.
    pub async fn remove_line(&self, key: &LineKey) -> Result<(), CartError> {
        let line = self.line_lock(key);
        let _serialized = line.lock().await;

        self.set_quantity_and_refresh(key, 0).await
    }

    /// Re-fetch the rendered cart and summary, replacing the view wholesale.
    ///
    /// Failure keeps the prior view and logs; this path is called
    /// opportunistically and never propagates an error.
    pub async fn refresh(&self) {
        let fragment = match self.backend.fetch_fragment().await {
            Ok(fragment) => fragment,
            Err(error) => {
                tracing::warn!(%error, "cart fragment refresh failed, keeping stale view");
                return;
            }
        };
        let summary = match self.backend.fetch_summary().await {
            Ok(summary) => summary,
            Err(error) => {
                tracing::warn!(%error, "cart summary refresh failed, keeping stale view");
                return;
            }
        };

        let view = CartView::from_parts(fragment, summary);
        tracing::debug!(item_count = view.item_count, "cart view refreshed");
        *lock(&self.view) = view;
    }

    /// Issue one absolute-quantity update, then refresh regardless of the
    /// outcome. Callers hold the line's lock across this, so the trailing
    /// refresh lands before the next mutation for the same key samples the
    /// displayed quantity.
    async fn set_quantity_and_refresh(
        &self,
        key: &LineKey,
        quantity: u32,
    ) -> Result<(), CartError> {
        let result = self.backend.change_line_quantity(key, quantity).await;
        self.refresh().await;
        result
    }

    fn line_lock(&self, key: &LineKey) -> Arc<AsyncMutex<()>> {
        let mut locks = lock(&self.line_locks);
        locks.entry(key.clone()).or_default().clone()
    }
}

/// Lock a std mutex, recovering the guard if a holder panicked.
fn lock<T>(mutex: &StdMutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Clears the submitting flag on drop, so the add-to-cart control is
/// re-enabled on success, failure and panic alike.
struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
