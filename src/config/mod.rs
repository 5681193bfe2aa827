//! Configuration types for the Square API SDK.
//!
//! The [`SquareConfig`] type is the credential context every operation borrows:
//! the application credentials, the authorization code obtained on the OAuth
//! redirect, the request timeout, and the base host requests are sent to.
//!
//! # Overview
//!
//! - [`SquareConfig`]: The immutable configuration
//! - [`SquareConfigBuilder`]: A builder for constructing [`SquareConfig`] instances
//! - [`ClientId`], [`ClientSecret`], [`StoreCode`]: Validated credentials
//! - [`ApiHost`]: A validated base URL, defaulting to production
//! - [`WebhookSignatureKey`]: Key for verifying inbound notifications
//!
//! # Example
//!
//! ```rust
//! use square_api::{SquareConfig, ClientId, ClientSecret, StoreCode};
//! use std::time::Duration;
//!
//! let config = SquareConfig::builder()
//!     .client_id(ClientId::new("sq0idp-app").unwrap())
//!     .client_secret(ClientSecret::new("sq0csp-secret").unwrap())
//!     .store_code(StoreCode::new("sq0cgp-code").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod newtypes;

pub use newtypes::{ApiHost, ClientId, ClientSecret, StoreCode, WebhookSignatureKey};

use std::time::Duration;

use crate::error::ConfigError;

/// Default timeout applied to every outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Square API SDK.
///
/// Immutable after construction. Every operation takes it by reference and
/// applies the same timeout and host to the request it sends.
///
/// # Thread Safety
///
/// `SquareConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct SquareConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    store_code: Option<StoreCode>,
    timeout: Duration,
    api_host: ApiHost,
    user_agent_prefix: Option<String>,
    webhook_signature_key: Option<WebhookSignatureKey>,
    webhook_notification_url: Option<String>,
}

impl SquareConfig {
    /// Creates a new builder for constructing a `SquareConfig`.
    #[must_use]
    pub fn builder() -> SquareConfigBuilder {
        SquareConfigBuilder::new()
    }

    /// Returns the application (client) ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the application secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the authorization code, if configured.
    #[must_use]
    pub const fn store_code(&self) -> Option<&StoreCode> {
        self.store_code.as_ref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the base host requests are sent to.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the webhook signature key, if configured.
    #[must_use]
    pub const fn webhook_signature_key(&self) -> Option<&WebhookSignatureKey> {
        self.webhook_signature_key.as_ref()
    }

    /// Returns the URL notifications are delivered to, if configured.
    ///
    /// Square signs the notification URL together with the body, so it must
    /// match the URL registered in the developer dashboard exactly.
    #[must_use]
    pub fn webhook_notification_url(&self) -> Option<&str> {
        self.webhook_notification_url.as_deref()
    }
}

// Verify SquareConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SquareConfig>();
};

/// Builder for constructing [`SquareConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `api_host`: `https://connect.squareup.com`
/// - `store_code`, `user_agent_prefix`, webhook settings: `None`
#[derive(Debug, Default)]
pub struct SquareConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    store_code: Option<StoreCode>,
    timeout: Option<Duration>,
    api_host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
    webhook_signature_key: Option<WebhookSignatureKey>,
    webhook_notification_url: Option<String>,
}

impl SquareConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the application secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the authorization code to exchange for an access token.
    #[must_use]
    pub fn store_code(mut self, code: StoreCode) -> Self {
        self.store_code = Some(code);
        self
    }

    /// Sets the timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the base host, e.g. for the sandbox or a mock server.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the key used to verify webhook notification signatures.
    #[must_use]
    pub fn webhook_signature_key(mut self, key: WebhookSignatureKey) -> Self {
        self.webhook_signature_key = Some(key);
        self
    }

    /// Sets the URL notifications are delivered to.
    #[must_use]
    pub fn webhook_notification_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_notification_url = Some(url.into());
        self
    }

    /// Builds the [`SquareConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set, and [`ConfigError::InvalidTimeout`] for a
    /// zero timeout.
    pub fn build(self) -> Result<SquareConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(SquareConfig {
            client_id,
            client_secret,
            store_code: self.store_code,
            timeout,
            api_host: self.api_host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            webhook_signature_key: self.webhook_signature_key,
            webhook_notification_url: self.webhook_notification_url,
        })
    }
}
