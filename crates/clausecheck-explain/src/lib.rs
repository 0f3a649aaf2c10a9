//! Explanation layer: fetches AI-generated context and suggestions for flagged clause items.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{DEFAULT_ENDPOINT, ExplainClient, ExplainError, fetch_all};
