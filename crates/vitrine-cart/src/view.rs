//! The local rendered-cart view.

use crate::port::{CartFragment, CartSummary};
use std::collections::HashMap;
use vitrine_core::LineKey;

/// What the page currently shows for the cart.
///
/// Replaced wholesale by every successful refresh; a failed refresh leaves
/// the previous view in place (stale but coherent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartView {
    /// Rendered cart markup, as last fetched.
    pub html: String,
    /// Item count shown on every count indicator.
    pub item_count: i64,
    /// Displayed quantity per line key.
    quantities: HashMap<LineKey, i64>,
}

impl CartView {
    /// Build a view from a fetched fragment and summary.
    pub fn from_parts(fragment: CartFragment, summary: CartSummary) -> Self {
        let quantities = fragment
            .lines
            .iter()
            .map(|line| (line.key.clone(), line.quantity))
            .collect();
        Self {
            html: fragment.html,
            item_count: summary.item_count,
            quantities,
        }
    }

    /// The displayed quantity for a line, if the line is rendered.
    pub fn displayed_quantity(&self, key: &LineKey) -> Option<i64> {
        self.quantities.get(key).copied()
    }

    /// Whether a line is present in the displayed cart.
    pub fn has_line(&self, key: &LineKey) -> bool {
        self.quantities.contains_key(key)
    }

    /// Number of distinct rendered lines.
    pub fn line_count(&self) -> usize {
        self.quantities.len()
    }
}
