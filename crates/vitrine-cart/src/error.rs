//! Cart operation errors.
//!
//! Every variant is recoverable and local: it is surfaced inline next to
//! the triggering control or logged, never allowed to take the page down.

use thiserror::Error;
use vitrine_core::LineKey;

/// Fallback shown when the remote response carries no description.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors from cart mutations and fetches.
#[derive(Debug, Error)]
pub enum CartError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The remote cart rejected the request.
    #[error("cart request failed with status {status}")]
    Remote {
        status: u16,
        /// Human-readable description from the response body, if any.
        description: Option<String>,
    },

    /// A submission for this control is already in flight.
    #[error("a cart submission is already in flight")]
    Busy,

    /// The line key is not present in the displayed cart.
    #[error("line {0} is not in the displayed cart")]
    UnknownLine(LineKey),
}

impl CartError {
    /// The message to show the user for this failure.
    ///
    /// Prefers the remote response's own description; everything else gets
    /// the generic message.
    pub fn user_message(&self) -> &str {
        match self {
            CartError::Remote {
                description: Some(description),
                ..
            } => description,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}
