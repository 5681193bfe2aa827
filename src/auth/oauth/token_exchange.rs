//! Authorization code exchange.
//!
//! This module turns an authorization code into an [`AccessTokenState`].
//!
//! The exchange is a single `POST oauth2/token` with a JSON body:
//!
//! ```text
//! {"client_id": "...", "client_secret": "...", "code": "...", "grant_type": "authorization_code"}
//! ```
//!
//! sent with `Authorization: Client <client_secret>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::auth::oauth::exchange_authorization_code;
//!
//! // The config's store code holds the code from the redirect.
//! let state = exchange_authorization_code(&config).await?;
//! println!("Token for merchant {}", state.merchant_id);
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::{AccessTokenState, TokenResponse};
use crate::clients::{
    Authorization, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
};
use crate::config::{SquareConfig, StoreCode};
use serde::Serialize;

/// Path of the token endpoint, shared by exchange and refresh.
pub(crate) const TOKEN_PATH: &str = "oauth2/token";

/// Grant type for authorization code exchange.
const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";

/// Request body for the authorization code exchange.
#[derive(Debug, Serialize)]
struct CodeExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    grant_type: &'a str,
}

/// Exchanges the authorization code held in the configuration.
///
/// # Errors
///
/// - [`OAuthError::MissingStoreCode`] if the configuration has no store code
/// - See [`exchange_code`] for the remaining cases
pub async fn exchange_authorization_code(
    config: &SquareConfig,
) -> Result<AccessTokenState, OAuthError> {
    let code = config.store_code().ok_or(OAuthError::MissingStoreCode)?;
    exchange_code(config, code).await
}

/// Exchanges an authorization code for an access token.
///
/// Exactly one request is sent. Status 200 is decoded into an
/// [`AccessTokenState`]; every other status is a failure.
///
/// # Errors
///
/// - [`OAuthError::TokenRequestFailed`] for any non-200 status, carrying the body
/// - [`OAuthError::Decode`] if a 200 body is not a token response
/// - [`OAuthError::Transport`] if no response was received
pub async fn exchange_code(
    config: &SquareConfig,
    code: &StoreCode,
) -> Result<AccessTokenState, OAuthError> {
    let body = CodeExchangeRequest {
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        code: code.as_ref(),
        grant_type: AUTHORIZATION_CODE_GRANT_TYPE,
    };

    let request = HttpRequest::builder(HttpMethod::Post, TOKEN_PATH)
        .body(encode_body(&body)?)
        .authorization(Authorization::Client(
            config.client_secret().as_ref().to_string(),
        ))
        .build()
        .map_err(HttpError::from)?;

    let client = HttpClient::new(config)?;
    let response = client.request(request).await?;

    if !response.is_ok() {
        return Err(OAuthError::TokenRequestFailed {
            status: response.code,
            body: response.body,
        });
    }

    let state = decode_token_response(&response)?;
    tracing::debug!(merchant_id = %state.merchant_id, "Authorization code exchanged");
    Ok(state)
}

/// Serializes a token request body.
pub(crate) fn encode_body<T: Serialize>(body: &T) -> Result<serde_json::Value, OAuthError> {
    serde_json::to_value(body).map_err(|e| OAuthError::Decode {
        message: format!("Failed to encode token request: {e}"),
    })
}

/// Decodes a 200 token response into an [`AccessTokenState`].
pub(crate) fn decode_token_response(
    response: &HttpResponse,
) -> Result<AccessTokenState, OAuthError> {
    response
        .json::<TokenResponse>()
        .map(AccessTokenState::from)
        .map_err(|e| OAuthError::Decode {
            message: e.to_string(),
        })
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CodeExchangeRequest<'_>>();
};
