//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Square application (client) ID.
///
/// # Example
///
/// ```rust
/// use square_api::ClientId;
///
/// let id = ClientId::new("sq0idp-abc").unwrap();
/// assert_eq!(id.as_ref(), "sq0idp-abc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Square application secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// ```rust
/// use square_api::ClientSecret;
///
/// let secret = ClientSecret::new("sq0csp-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// The authorization code handed back on the OAuth redirect.
///
/// The code is single-use and short-lived, so it is masked in `Debug` output
/// like the other credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreCode(String);

impl StoreCode {
    /// Creates a new validated store code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreCode`] if the code is empty.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ConfigError::EmptyStoreCode);
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for StoreCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StoreCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoreCode(*****)")
    }
}

/// The key used to sign webhook notifications.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookSignatureKey(String);

impl WebhookSignatureKey {
    /// Creates a new validated signature key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWebhookSignatureKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyWebhookSignatureKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for WebhookSignatureKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WebhookSignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookSignatureKey(*****)")
    }
}

/// A validated base URL for the Square API.
///
/// Trailing slashes are removed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use square_api::ApiHost;
///
/// let host = ApiHost::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(host.as_ref(), "http://127.0.0.1:8080");
/// assert_eq!(host.scheme(), "http");
/// assert_eq!(host.host_name(), "127.0.0.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// The production Square Connect host.
    pub const PRODUCTION: &'static str = "https://connect.squareup.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiHost { url });
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiHost { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the production host.
    #[must_use]
    pub fn production() -> Self {
        Self {
            url: Self::PRODUCTION.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::PRODUCTION.len(),
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self::production()
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
