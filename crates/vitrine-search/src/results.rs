//! Predictive search result types.

use serde::{Deserialize, Serialize};
use vitrine_core::Money;

/// One suggestion row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    /// Product title.
    pub title: String,
    /// Link to the product page.
    pub url: String,
    /// Price of the product's default variant, when the endpoint sends it.
    #[serde(default)]
    pub price: Option<Money>,
}

/// A bounded set of suggestions for one query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchResults {
    /// The query these results answer.
    pub query: String,
    /// Suggestion rows, best first.
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    /// Create an empty result set for a query.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            hits: Vec::new(),
        }
    }

    /// Check if no suggestions came back.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of suggestions.
    pub fn len(&self) -> usize {
        self.hits.len()
    }
}
