//! Error types for the Square API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use square_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide your Square application ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide your Square application secret.")]
    EmptyClientSecret,

    /// Store code (authorization code) cannot be empty.
    #[error("Store code cannot be empty. Pass the authorization code received on the OAuth redirect.")]
    EmptyStoreCode,

    /// Webhook signature key cannot be empty.
    #[error("Webhook signature key cannot be empty.")]
    EmptyWebhookSignatureKey,

    /// API host is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://connect.squareup.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Timeout must be non-zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,

    /// Permissions are invalid.
    #[error("Invalid permissions: {reason}")]
    InvalidPermissions {
        /// The reason the permissions are invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
