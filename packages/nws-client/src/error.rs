//! Error types for the NWS client.

use thiserror::Error;

/// Result type for NWS client operations.
pub type Result<T> = std::result::Result<T, NwsError>;

/// NWS client errors.
///
/// Upstream HTTP statuses are not errors here; they travel with the
/// response. Only transport-level failures surface as `Err`.
#[derive(Debug, Error)]
pub enum NwsError {
    /// Transport failure (connection, DNS, reading the body)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
