//! The narrow port to the remote cart backend.
//!
//! Four operations cover everything the controller needs. The remote
//! platform's own endpoint shapes stay behind implementations of
//! [`CartBackend`]; the reconciliation logic never sees them, which keeps
//! it testable against a fake.

use crate::error::CartError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vitrine_core::{LineKey, VariantId};

/// A custom property attached to a line at add time (e.g., engraving).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineProperty {
    pub name: String,
    pub value: String,
}

/// Form payload for adding a line.
///
/// The controller does not re-validate purchasability; the remote system's
/// own validation is authoritative and its rejection comes back as
/// [`CartError::Remote`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddLineRequest {
    /// Variant to add.
    pub variant_id: VariantId,
    /// Units to add.
    pub quantity: u32,
    /// Custom properties for the new line.
    #[serde(default)]
    pub properties: Vec<LineProperty>,
}

impl AddLineRequest {
    /// Create a request for a variant and quantity.
    pub fn new(variant_id: VariantId, quantity: u32) -> Self {
        Self {
            variant_id,
            quantity,
            properties: Vec::new(),
        }
    }

    /// Attach a custom property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(LineProperty {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Numeric cart summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Total units across all lines.
    pub item_count: i64,
}

/// One line row as the remote render describes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedLine {
    /// Opaque remote line key.
    pub key: LineKey,
    /// Quantity as rendered — the number the user sees.
    pub quantity: i64,
}

/// The rendered cart: markup plus the line rows it was built from.
///
/// The structured rows are what quantity steppers read back as the
/// "displayed quantity"; the markup is replaced wholesale on refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartFragment {
    /// Rendered cart markup.
    pub html: String,
    /// Line rows present in the render.
    pub lines: Vec<RenderedLine>,
}

/// Async port over the remote cart endpoints.
#[async_trait]
pub trait CartBackend: Send + Sync {
    /// Add a line to the remote cart.
    async fn add_line(&self, request: &AddLineRequest) -> Result<(), CartError>;

    /// Set a line's absolute quantity. Zero removes the line.
    async fn change_line_quantity(&self, key: &LineKey, quantity: u32) -> Result<(), CartError>;

    /// Fetch the numeric cart summary.
    async fn fetch_summary(&self) -> Result<CartSummary, CartError>;

    /// Fetch the rendered cart fragment.
    async fn fetch_fragment(&self) -> Result<CartFragment, CartError>;
}

#[async_trait]
impl<B: CartBackend + ?Sized> CartBackend for std::sync::Arc<B> {
    async fn add_line(&self, request: &AddLineRequest) -> Result<(), CartError> {
        (**self).add_line(request).await
    }

    async fn change_line_quantity(&self, key: &LineKey, quantity: u32) -> Result<(), CartError> {
        (**self).change_line_quantity(key, quantity).await
    }

    async fn fetch_summary(&self) -> Result<CartSummary, CartError> {
        (**self).fetch_summary().await
    }

    async fn fetch_fragment(&self) -> Result<CartFragment, CartError> {
        (**self).fetch_fragment().await
    }
}
