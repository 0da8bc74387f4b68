//! Search error types.

use thiserror::Error;

/// Errors from the predictive-search endpoint.
///
/// All recoverable: the panel keeps showing the last results and the
/// failure is logged, never surfaced as a page error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint rejected the request.
    #[error("search request failed with status {status}")]
    Remote { status: u16 },
}
