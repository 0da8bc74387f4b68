//! Typed storefront domain model and variant resolution for Vitrine.
//!
//! This crate owns the product-page half of a storefront session:
//!
//! - **Catalog**: products, variants, option tuples, validated eagerly at
//!   the JSON boundary
//! - **Resolution**: mapping a set of selected option values to exactly one
//!   variant (or an explicit no-match)
//! - **Display**: deriving the price, compare-at price, stock label and
//!   submit-button state the UI needs for a resolved variant
//! - **Address**: reflecting the active variant into a page URL's query
//!   string as a pure, idempotent replacement
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_core::prelude::*;
//!
//! let product = Product::from_value(embedded_json)?;
//! let resolver = VariantResolver::new(product);
//!
//! let initial = resolver.initial_variant(variant_param(page_url));
//! let mut selection = Selection::new();
//! selection.select(0, "Large");
//! selection.select(1, "Blue");
//!
//! let state = display_state(resolver.resolve(&selection));
//! println!("{}", state.submit_label.text());
//! ```

pub mod address;
pub mod catalog;
pub mod display;
pub mod error;
pub mod ids;
pub mod money;
pub mod resolver;

pub use error::CoreError;
pub use ids::{LineKey, ProductId, VariantId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::address::{replace_variant_param, variant_param};
    pub use crate::catalog::{Product, Variant, VariantImage};
    pub use crate::display::{display_state, DisplayState, StockLabel, SubmitLabel};
    pub use crate::error::CoreError;
    pub use crate::ids::{LineKey, ProductId, VariantId};
    pub use crate::money::{Currency, Money};
    pub use crate::resolver::{Selection, VariantResolver};
}
