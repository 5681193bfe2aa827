//! Error types for the REST client.

use crate::clients::HttpError;
use thiserror::Error;

/// Errors from [`RestClient`](crate::clients::RestClient) construction and requests.
///
/// # Example
///
/// ```rust
/// use square_api::clients::RestError;
///
/// let error = RestError::MissingAccessToken;
/// assert!(error.to_string().contains("access token"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The access token is empty.
    #[error("An access token is required for authenticated requests")]
    MissingAccessToken,

    /// The request could not be built or sent.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify RestError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestError>();
};
