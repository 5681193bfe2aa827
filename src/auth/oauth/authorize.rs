//! Authorization URL generation.
//!
//! This module provides [`authorize_url`], the first step of the
//! authorization-code flow: the merchant is redirected to the returned URL,
//! grants the requested permissions, and Square redirects back with a code.
//!
//! # Example
//!
//! ```rust
//! use square_api::{ClientId, ClientSecret, SquareConfig};
//! use square_api::auth::Permissions;
//! use square_api::auth::oauth::authorize_url;
//!
//! let config = SquareConfig::builder()
//!     .client_id(ClientId::new("sq0idp-app").unwrap())
//!     .client_secret(ClientSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let result = authorize_url(&config, &Permissions::default_read(), false);
//! assert!(result.url.starts_with("https://connect.squareup.com/oauth2/authorize?"));
//! assert!(result.url.contains("client_id=sq0idp-app"));
//! // Keep result.state to validate the callback.
//! ```

use crate::auth::oauth::state::StateParam;
use crate::auth::Permissions;
use crate::config::SquareConfig;

/// The authorization URL and the state it was issued with.
#[derive(Clone, Debug)]
pub struct AuthorizeResult {
    /// The URL to redirect the merchant to.
    pub url: String,
    /// The state to compare against the callback's `state` parameter.
    pub state: StateParam,
}

/// Builds the authorization URL for the configured application.
///
/// The query carries `client_id`, `scope` (space separated), `session` and a
/// freshly generated `state`, each URL-encoded.
#[must_use]
pub fn authorize_url(
    config: &SquareConfig,
    permissions: &Permissions,
    session: bool,
) -> AuthorizeResult {
    let state = StateParam::new();

    let params = [
        ("client_id", config.client_id().as_ref().to_string()),
        ("scope", permissions.to_string()),
        ("session", session.to_string()),
        ("state", state.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let url = format!(
        "{}/oauth2/authorize?{}",
        config.api_host().as_ref(),
        query_string
    );

    AuthorizeResult { url, state }
}

// Verify AuthorizeResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthorizeResult>();
};
