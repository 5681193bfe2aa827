//! Access token refresh.
//!
//! This module provides [`refresh_access_token`], which renews an access
//! token with the refresh-token grant, and [`RefreshCoordinator`], a
//! single-flight guard for callers that share one credential across tasks.
//!
//! # Protocol
//!
//! A single `POST oauth2/token` with a JSON body and no authorization header:
//!
//! ```text
//! {"client_id": "...", "client_secret": "...", "refresh_token": "...", "grant_type": "refresh_token"}
//! ```
//!
//! # Concurrency
//!
//! Square may invalidate a refresh token once it has been used. Two tasks
//! refreshing with the same token at the same time race: one gets the new
//! token, the other is rejected. Either serialize refreshes yourself or route
//! them through a shared [`RefreshCoordinator`].
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::auth::oauth::refresh_access_token;
//!
//! if state.expires_within(chrono::Duration::days(7)) {
//!     if let Some(refresh_token) = &state.refresh_token {
//!         state = refresh_access_token(&config, refresh_token).await?;
//!     }
//! }
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::token_exchange::{decode_token_response, encode_body, TOKEN_PATH};
use crate::auth::AccessTokenState;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ClientId, SquareConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Grant type for refresh token requests.
const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// Request body for token refresh.
#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'a str,
}

/// Error body returned by the token endpoint (`{"message": ..., "type": ...}`).
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Refreshes an access token using a refresh token.
///
/// Exactly one request is sent. The returned state replaces the caller's
/// previous one entirely; it carries the new refresh token if one was issued.
///
/// # Errors
///
/// - [`OAuthError::RefreshRejected`] for status 400 and above
/// - [`OAuthError::RefreshFailed`] for any other non-200 status
/// - [`OAuthError::Decode`] if a 200 body is not a token response
/// - [`OAuthError::Transport`] if no response was received
pub async fn refresh_access_token(
    config: &SquareConfig,
    refresh_token: &str,
) -> Result<AccessTokenState, OAuthError> {
    let body = TokenRefreshRequest {
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        refresh_token,
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
    };

    let request = HttpRequest::builder(HttpMethod::Post, TOKEN_PATH)
        .body(encode_body(&body)?)
        .build()
        .map_err(HttpError::from)?;

    let client = HttpClient::new(config)?;
    let response = client.request(request).await?;

    if !response.is_ok() {
        let status = response.code;
        let message = error_message(&response);
        return Err(if response.is_error() {
            OAuthError::RefreshRejected { status, message }
        } else {
            OAuthError::RefreshFailed { status, message }
        });
    }

    let state = decode_token_response(&response)?;
    tracing::debug!(merchant_id = %state.merchant_id, "Access token refreshed");
    Ok(state)
}

/// The provider's `message`, or the raw body when it isn't an error document.
fn error_message(response: &HttpResponse) -> String {
    response
        .json::<ErrorResponse>()
        .map_or_else(|_| response.body.clone(), |error| error.message)
}

/// Successful refreshes for one client, keyed by the refresh token each one
/// consumed.
type Rotations = HashMap<String, AccessTokenState>;

type Slot = Arc<Mutex<Rotations>>;

/// Single-flight guard around [`refresh_access_token`].
///
/// Refreshes are serialized per client ID. One application serves many
/// merchants, so every rotation is remembered under the refresh token it
/// consumed. A caller presenting an already spent token receives the state
/// that token was exchanged for instead of sending it again. Rotations are
/// dropped once their access token has expired.
///
/// Share one coordinator (e.g. in an `Arc`) between every task that refreshes
/// the same credential. Nothing is persisted.
///
/// # Example
///
/// ```rust,ignore
/// use square_api::auth::oauth::RefreshCoordinator;
/// use std::sync::Arc;
///
/// let coordinator = Arc::new(RefreshCoordinator::new());
///
/// // In each task holding a copy of the old state:
/// let state = coordinator.refresh(&config, &old_refresh_token).await?;
/// ```
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    slots: Mutex<HashMap<ClientId, Slot>>,
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RefreshCoordinator>();
    assert_send_sync::<TokenRefreshRequest<'_>>();
};

impl RefreshCoordinator {
    /// Creates a coordinator with no refresh history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes the configured client's token, at most one request at a time.
    ///
    /// # Errors
    ///
    /// Same as [`refresh_access_token`]. Failures are not remembered.
    pub async fn refresh(
        &self,
        config: &SquareConfig,
        refresh_token: &str,
    ) -> Result<AccessTokenState, OAuthError> {
        let slot = self.slot_for(config.client_id()).await;
        let mut rotations = slot.lock().await;

        rotations.retain(|_, state| !state.expired());

        if let Some(state) = rotations.get(refresh_token) {
            tracing::debug!(
                client_id = %config.client_id().as_ref(),
                merchant_id = %state.merchant_id,
                "Refresh token already rotated, returning rotated state"
            );
            return Ok(state.clone());
        }

        let state = refresh_access_token(config, refresh_token).await?;
        rotations.insert(refresh_token.to_string(), state.clone());

        Ok(state)
    }

    async fn slot_for(&self, client_id: &ClientId) -> Slot {
        let mut slots = self.slots.lock().await;
        Arc::clone(slots.entry(client_id.clone()).or_default())
    }
}
