//! Product and variant types.
//!
//! The product page embeds a serialized [`Product`] at load time. It is
//! decoded and validated eagerly through [`Product::from_value`]; nothing
//! downstream ever sees a partially-typed product.

use crate::error::CoreError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An image attached to a specific variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantImage {
    /// URL to the image file.
    pub url: String,
    /// Alt text for accessibility.
    #[serde(default)]
    pub alt: Option<String>,
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Option values, one per product option, in product option order.
    pub options: Vec<String>,
    /// Price of this variant.
    pub price: Money,
    /// Compare-at price (original price for showing markdowns).
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Whether this variant can currently be purchased.
    pub available: bool,
    /// Whether the platform tracks inventory for this variant.
    #[serde(default)]
    pub inventory_managed: bool,
    /// Units in stock. Meaningful only when `inventory_managed` is set.
    #[serde(default)]
    pub inventory_quantity: i64,
    /// Image to swap in when this variant is active.
    #[serde(default)]
    pub featured_image: Option<VariantImage>,
}

impl Variant {
    /// Check if this variant is marked down (compare-at strictly above price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.minor_units > self.price.minor_units)
            .unwrap_or(false)
    }

    /// The option value at a given option index, if the index is in range.
    pub fn option_value(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Variant title built from its option values (e.g., "Large / Blue").
    pub fn title(&self) -> String {
        self.options.join(" / ")
    }
}

/// A product with its ordered options and variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Ordered option names (e.g., `["Size", "Color"]`).
    pub option_names: Vec<String>,
    /// Ordered, immutable variant list.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Decode and validate an embedded product payload.
    ///
    /// This is the only way product data enters the typed model. Structural
    /// violations are returned as errors; the caller must treat any error
    /// as "feature does not activate".
    pub fn from_value(value: serde_json::Value) -> Result<Self, CoreError> {
        let product: Product = serde_json::from_value(value)?;
        product.validate()?;
        Ok(product)
    }

    /// Decode and validate a JSON string payload.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let product: Product = serde_json::from_str(json)?;
        product.validate()?;
        Ok(product)
    }

    /// Check the structural invariants of the variant list.
    ///
    /// - at least one option name and one variant
    /// - every variant's tuple length equals the option count
    /// - no two variants share an option tuple
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.option_names.is_empty() {
            return Err(CoreError::NoOptions(self.id.value()));
        }
        if self.variants.is_empty() {
            return Err(CoreError::NoVariants(self.id.value()));
        }

        let expected = self.option_names.len();
        for variant in &self.variants {
            if variant.options.len() != expected {
                return Err(CoreError::OptionArityMismatch {
                    variant: variant.id.value(),
                    expected,
                    found: variant.options.len(),
                });
            }
        }

        for (i, a) in self.variants.iter().enumerate() {
            for b in &self.variants[i + 1..] {
                if a.options == b.options {
                    return Err(CoreError::DuplicateOptionTuple {
                        first: a.id.value(),
                        second: b.id.value(),
                        tuple: a.options.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Number of option axes.
    pub fn option_count(&self) -> usize {
        self.option_names.len()
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{shirt, variant};
    use super::*;
    use crate::money::Currency;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_valid_product() {
        let value = json!({
            "id": 100,
            "title": "Shirt",
            "option_names": ["Size"],
            "variants": [{
                "id": 1,
                "options": ["Small"],
                "price": { "minor_units": 2500, "currency": "USD" },
                "available": true
            }]
        });

        let product = Product::from_value(value).unwrap();
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.variants[0].price, Money::new(2500, Currency::USD));
    }

    #[test]
    fn test_from_value_rejects_missing_fields() {
        let value = json!({ "id": 100, "title": "Shirt" });
        assert!(matches!(
            Product::from_value(value),
            Err(CoreError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_variants() {
        let mut product = shirt();
        product.variants.clear();
        assert!(matches!(product.validate(), Err(CoreError::NoVariants(100))));
    }

    #[test]
    fn test_validate_rejects_arity_mismatch() {
        let mut product = shirt();
        product.variants.push(variant(9, &["Small"], true));
        assert!(matches!(
            product.validate(),
            Err(CoreError::OptionArityMismatch {
                variant: 9,
                expected: 2,
                found: 1,
            })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_tuple() {
        let mut product = shirt();
        product.variants.push(variant(9, &["Small", "Blue"], true));
        assert!(matches!(
            product.validate(),
            Err(CoreError::DuplicateOptionTuple { first: 2, second: 9, .. })
        ));
    }

    #[test]
    fn test_variant_on_sale_requires_higher_compare_price() {
        let mut v = variant(1, &["Small", "Red"], true);
        assert!(!v.is_on_sale());

        v.compare_at_price = Some(Money::new(3000, Currency::USD));
        assert!(v.is_on_sale());

        // Equal compare-at is not a markdown.
        v.compare_at_price = Some(v.price);
        assert!(!v.is_on_sale());
    }

    #[test]
    fn test_variant_title_joins_options() {
        let v = variant(3, &["Large", "Blue"], true);
        assert_eq!(v.title(), "Large / Blue");
    }
}
