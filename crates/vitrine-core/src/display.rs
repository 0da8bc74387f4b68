//! Display-state derivation for a resolved variant.
//!
//! Pure functions from the resolution result to everything the product
//! form renders: price strings, the stock label tier, the image swap and
//! the add-to-cart button state.

use crate::catalog::{Variant, VariantImage};

/// Inventory at or below this many units shows the "Only N left" tier.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// The three mutually exclusive stock tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLabel {
    /// Variant exists but cannot be purchased.
    OutOfStock,
    /// Available, inventory managed, and running low.
    OnlyLeft(i64),
    /// Available with no low-stock signal.
    InStock,
}

impl StockLabel {
    /// Label text as rendered in the stock badge.
    pub fn text(&self) -> String {
        match self {
            StockLabel::OutOfStock => "Out of Stock".to_string(),
            StockLabel::OnlyLeft(n) => format!("Only {} left", n),
            StockLabel::InStock => "In Stock".to_string(),
        }
    }
}

/// Label on the add-to-cart control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    /// Matched and purchasable.
    AddToCart,
    /// Matched but not purchasable.
    SoldOut,
    /// No variant matches the selection.
    Unavailable,
}

impl SubmitLabel {
    pub fn text(&self) -> &'static str {
        match self {
            SubmitLabel::AddToCart => "Add to Cart",
            SubmitLabel::SoldOut => "Sold Out",
            SubmitLabel::Unavailable => "Unavailable",
        }
    }
}

/// Everything the product form needs to render a resolution result.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Formatted price. `None` when no variant matches.
    pub price: Option<String>,
    /// Formatted compare-at price, present only for a real markdown.
    pub compare_at_price: Option<String>,
    /// Stock tier. `None` when no variant matches.
    pub stock: Option<StockLabel>,
    /// Image to swap in. `None` means leave the current image unchanged.
    pub image: Option<VariantImage>,
    /// Whether the add-to-cart control accepts submission.
    pub submit_enabled: bool,
    /// Label on the add-to-cart control.
    pub submit_label: SubmitLabel,
}

/// Derive the display state for a resolution result.
///
/// `None` input is the no-match sentinel: a terminal "Unavailable" state,
/// distinct from a matched-but-sold-out variant.
pub fn display_state(variant: Option<&Variant>) -> DisplayState {
    let Some(variant) = variant else {
        return DisplayState {
            price: None,
            compare_at_price: None,
            stock: None,
            image: None,
            submit_enabled: false,
            submit_label: SubmitLabel::Unavailable,
        };
    };

    let stock = if !variant.available {
        StockLabel::OutOfStock
    } else if variant.inventory_managed
        && variant.inventory_quantity > 0
        && variant.inventory_quantity <= LOW_STOCK_THRESHOLD
    {
        StockLabel::OnlyLeft(variant.inventory_quantity)
    } else {
        StockLabel::InStock
    };

    DisplayState {
        price: Some(variant.price.display()),
        compare_at_price: variant
            .compare_at_price
            .filter(|cap| cap.minor_units > variant.price.minor_units)
            .map(|cap| cap.display()),
        stock: Some(stock),
        image: variant.featured_image.clone(),
        submit_enabled: variant.available,
        submit_label: if variant.available {
            SubmitLabel::AddToCart
        } else {
            SubmitLabel::SoldOut
        },
    }
}
