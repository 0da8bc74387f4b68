//! Debounced predictive search for Vitrine.
//!
//! Type-ahead search against the remote platform's suggestion endpoint.
//! Rapidly-changing input is debounced before a request is issued, and a
//! monotonic sequence guard keeps an already-issued stale response from
//! overwriting a fresher one when the network reorders completions.

pub mod error;
pub mod predictive;
pub mod results;

pub use error::SearchError;
pub use predictive::{PredictiveSearch, SearchBackend, DEBOUNCE_DELAY, MIN_QUERY_LEN, RESULT_LIMIT};
pub use results::{SearchHit, SearchResults};
