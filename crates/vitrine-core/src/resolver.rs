//! Variant resolution.
//!
//! Maps the user's current option selection to exactly one variant from
//! the product's fixed candidate list. A combination with no variant is a
//! normal outcome ([`Option::None`]), not an error: the UI renders it as
//! "Unavailable", distinct from a sold-out variant.

use crate::catalog::{Product, Variant};
use crate::ids::VariantId;
use std::collections::BTreeMap;

/// The currently chosen option values, keyed by option index.
///
/// Indices absent from the selection are wildcards. In steady state the UI
/// supplies a value per option; partial selections occur only while the
/// inputs are initializing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: BTreeMap<usize, String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a value for an option index, replacing any prior choice.
    pub fn select(&mut self, index: usize, value: impl Into<String>) {
        self.chosen.insert(index, value.into());
    }

    /// Clear the choice for an option index.
    pub fn clear(&mut self, index: usize) {
        self.chosen.remove(&index);
    }

    /// The chosen value for an option index, if any.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.chosen.get(&index).map(String::as_str)
    }

    /// Number of option indices with a chosen value.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Check if no value is chosen.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Iterate over (index, value) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.chosen.iter().map(|(i, v)| (*i, v.as_str()))
    }

    fn matches(&self, variant: &Variant) -> bool {
        self.chosen
            .iter()
            .all(|(index, value)| variant.option_value(*index) == Some(value.as_str()))
    }
}

impl FromIterator<(usize, String)> for Selection {
    fn from_iter<T: IntoIterator<Item = (usize, String)>>(iter: T) -> Self {
        Self {
            chosen: iter.into_iter().collect(),
        }
    }
}

/// Resolves option selections against a validated [`Product`].
///
/// Construction requires an already-validated product, so every method can
/// rely on the catalog invariants (non-empty variant list, uniform tuple
/// arity, no duplicate tuples).
#[derive(Debug, Clone)]
pub struct VariantResolver {
    product: Product,
}

impl VariantResolver {
    /// Create a resolver over a validated product.
    pub fn new(product: Product) -> Self {
        Self { product }
    }

    /// The product this resolver serves.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.product.variant(id)
    }

    /// Select the variant to show on first paint.
    ///
    /// Precedence, in order:
    /// 1. a variant named by the page URL, if it exists on this product
    /// 2. the first variant flagged available
    /// 3. the first variant in list order
    pub fn initial_variant(&self, url_variant: Option<VariantId>) -> &Variant {
        if let Some(id) = url_variant {
            if let Some(variant) = self.product.variant(id) {
                return variant;
            }
        }
        self.product
            .variants
            .iter()
            .find(|v| v.available)
            // validate() guarantees at least one variant
            .unwrap_or(&self.product.variants[0])
    }

    /// Resolve a selection to its matching variant.
    ///
    /// A variant matches iff its option value equals the selected value at
    /// every index present in the selection. Returns the first match in
    /// list order; `None` when the combination has no variant.
    pub fn resolve(&self, selection: &Selection) -> Option<&Variant> {
        self.product
            .variants
            .iter()
            .find(|variant| selection.matches(variant))
    }

    /// Build the selection that names a specific variant's option tuple.
    pub fn selection_for(&self, variant: &Variant) -> Selection {
        variant
            .options
            .iter()
            .enumerate()
            .map(|(i, v)| (i, v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::shirt;

    fn selection(pairs: &[(usize, &str)]) -> Selection {
        pairs
            .iter()
            .map(|(i, v)| (*i, v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_full_selection_finds_unique_variant() {
        let resolver = VariantResolver::new(shirt());

        let found = resolver
            .resolve(&selection(&[(0, "Small"), (1, "Blue")]))
            .unwrap();
        assert_eq!(found.id, VariantId::new(2));
    }

    #[test]
    fn test_resolve_missing_combination_is_none() {
        let resolver = VariantResolver::new(shirt());

        // "Large / Red" is the hole in the fixture grid.
        assert!(resolver
            .resolve(&selection(&[(0, "Large"), (1, "Red")]))
            .is_none());
    }

    #[test]
    fn test_resolve_partial_selection_wildcards_absent_indices() {
        let resolver = VariantResolver::new(shirt());

        // Only the color is chosen; first Blue variant in list order wins.
        let found = resolver.resolve(&selection(&[(1, "Blue")])).unwrap();
        assert_eq!(found.id, VariantId::new(2));
    }

    #[test]
    fn test_resolve_empty_selection_returns_first_variant() {
        let resolver = VariantResolver::new(shirt());
        let found = resolver.resolve(&Selection::new()).unwrap();
        assert_eq!(found.id, VariantId::new(1));
    }

    #[test]
    fn test_initial_variant_url_beats_first_available() {
        let resolver = VariantResolver::new(shirt());

        // Variant 1 is unavailable, variant 2 is the first available one.
        // A URL naming variant 1 must still win.
        let initial = resolver.initial_variant(Some(VariantId::new(1)));
        assert_eq!(initial.id, VariantId::new(1));
        assert!(!initial.available);
    }

    #[test]
    fn test_initial_variant_unknown_url_falls_back_to_first_available() {
        let resolver = VariantResolver::new(shirt());
        let initial = resolver.initial_variant(Some(VariantId::new(999)));
        assert_eq!(initial.id, VariantId::new(2));
    }

    #[test]
    fn test_initial_variant_no_available_falls_back_to_first() {
        let mut product = shirt();
        for v in &mut product.variants {
            v.available = false;
        }
        let resolver = VariantResolver::new(product);
        assert_eq!(resolver.initial_variant(None).id, VariantId::new(1));
    }

    #[test]
    fn test_selection_for_roundtrips_through_resolve() {
        let resolver = VariantResolver::new(shirt());
        let variant = resolver.variant(VariantId::new(3)).unwrap().clone();

        let selection = resolver.selection_for(&variant);
        assert_eq!(resolver.resolve(&selection).unwrap().id, variant.id);
    }
}
