//! Core error types.
//!
//! Every variant here is a missing-precondition failure: the embedded
//! product payload was absent or structurally wrong. Callers treat these
//! as "do not activate", never as a recoverable runtime condition.

use thiserror::Error;

/// Errors that can occur validating embedded product data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Payload could not be decoded into the typed model at all.
    #[error("malformed product payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Product declares no option names.
    #[error("product {0} declares no options")]
    NoOptions(u64),

    /// Product carries no variants.
    #[error("product {0} has no variants")]
    NoVariants(u64),

    /// A variant's option tuple does not match the product's option count.
    #[error("variant {variant}: expected {expected} option values, found {found}")]
    OptionArityMismatch {
        variant: u64,
        expected: usize,
        found: usize,
    },

    /// Two variants share the same option tuple.
    #[error("variants {first} and {second} share the option tuple {tuple:?}")]
    DuplicateOptionTuple {
        first: u64,
        second: u64,
        tuple: Vec<String>,
    },
}
