//! OAuth-specific error types for the Square API SDK.
//!
//! # Error Types
//!
//! - [`OAuthError::TokenRequestFailed`]: The code exchange returned a non-200 status
//! - [`OAuthError::RefreshRejected`]: The refresh was refused (status >= 400)
//! - [`OAuthError::RefreshFailed`]: The refresh returned another non-200 status
//! - [`OAuthError::Decode`]: A 200 response whose body is not a token response
//! - [`OAuthError::Transport`]: The request never produced a response
//! - [`OAuthError::MissingStoreCode`]: No authorization code was configured
//! - [`OAuthError::StateMismatch`], [`OAuthError::AuthorizationDenied`],
//!   [`OAuthError::InvalidCallback`]: Redirect callback validation failures
//!
//! Callers typically re-authenticate on `TokenRequestFailed` and
//! `RefreshRejected`, retry later on `Transport` and `RefreshFailed`, and treat
//! `Decode` as an unusable response.
//!
//! # Example
//!
//! ```rust
//! use square_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::RefreshRejected {
//!     status: 401,
//!     message: "Invalid refresh token".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! assert!(error.requires_reauthorization());
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The configuration has no authorization code to exchange.
    #[error("No store code configured. Set the authorization code with SquareConfigBuilder::store_code().")]
    MissingStoreCode,

    /// The authorization code exchange returned a non-200 status.
    #[error("Token request failed with status {status}: {body}")]
    TokenRequestFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The refresh token was rejected (status 400 or above).
    #[error("Token refresh rejected with status {status}: {message}")]
    RefreshRejected {
        /// The HTTP status code returned.
        status: u16,
        /// The provider's error message, or the raw body.
        message: String,
    },

    /// The refresh returned a non-200 status below 400.
    #[error("Token refresh failed with status {status}: {message}")]
    RefreshFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The provider's error message, or the raw body.
        message: String,
    },

    /// A 200 response whose body could not be decoded.
    #[error("Failed to decode token response: {message}")]
    Decode {
        /// The decoder's message.
        message: String,
    },

    /// The request failed before a response was received.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The provider redirected back with an error instead of a code.
    #[error("Authorization denied: {error}{}", description.as_deref().map(|d| format!(" ({d})")).unwrap_or_default())]
    AuthorizationDenied {
        /// The `error` query parameter.
        error: String,
        /// The `error_description` query parameter, if present.
        description: Option<String>,
    },

    /// The callback state does not match the state issued with the authorize URL.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The state issued with the authorize URL.
        expected: String,
        /// The state received on the callback.
        received: String,
    },

    /// The callback query is missing required parameters.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// Description of what's invalid about the callback.
        reason: String,
    },
}

impl OAuthError {
    /// Returns `true` when the caller must restart the authorization flow.
    #[must_use]
    pub const fn requires_reauthorization(&self) -> bool {
        matches!(
            self,
            Self::TokenRequestFailed { .. }
                | Self::RefreshRejected { .. }
                | Self::MissingStoreCode
                | Self::AuthorizationDenied { .. }
        )
    }
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
