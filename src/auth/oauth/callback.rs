//! Redirect callback validation.
//!
//! After the merchant grants access, Square redirects to the application's
//! redirect URL with `code` and `state` query parameters, or with `error` and
//! `error_description` when access was denied. [`validate_callback`] checks
//! the query and yields the authorization code as a [`StoreCode`], ready for
//! [`exchange_code`](crate::auth::oauth::exchange_code).
//!
//! # Example
//!
//! ```rust
//! use square_api::auth::oauth::{validate_callback, AuthCallbackQuery, StateParam};
//!
//! let query = AuthCallbackQuery::from_query_string("code=sq0cgp-abc&state=xyz").unwrap();
//! let expected = StateParam::from_raw("xyz");
//!
//! let code = validate_callback(&query, &expected).unwrap();
//! assert_eq!(code.as_ref(), "sq0cgp-abc");
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::config::StoreCode;
use serde::Deserialize;
use subtle::ConstantTimeEq;

/// Query parameters of the authorization redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthCallbackQuery {
    /// The authorization code.
    #[serde(default)]
    pub code: Option<String>,
    /// The state issued with the authorization URL.
    #[serde(default)]
    pub state: Option<String>,
    /// Set when the merchant denied access.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable detail for `error`.
    #[serde(default)]
    pub error_description: Option<String>,
}

impl AuthCallbackQuery {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// Unknown parameters are ignored. Empty values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::InvalidCallback`] if a value is not valid
    /// percent-encoded UTF-8.
    pub fn from_query_string(query: &str) -> Result<Self, OAuthError> {
        let mut parsed = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let key = decode_component(key)?;
            let value = decode_component(value)?;
            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                "code" => parsed.code = Some(value),
                "state" => parsed.state = Some(value),
                "error" => parsed.error = Some(value),
                "error_description" => parsed.error_description = Some(value),
                _ => {}
            }
        }

        Ok(parsed)
    }
}

fn decode_component(value: &str) -> Result<String, OAuthError> {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| OAuthError::InvalidCallback {
            reason: format!("Malformed query component: {e}"),
        })
}

/// Returns `true` if both strings are equal, in constant time.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Validates an authorization redirect and returns its code.
///
/// Checks run in this order: a provider `error` yields
/// [`OAuthError::AuthorizationDenied`]; a missing or different `state`
/// yields [`OAuthError::StateMismatch`]; a missing `code` yields
/// [`OAuthError::InvalidCallback`].
///
/// # Errors
///
/// See above.
pub fn validate_callback(
    query: &AuthCallbackQuery,
    expected_state: &StateParam,
) -> Result<StoreCode, OAuthError> {
    if let Some(error) = &query.error {
        tracing::warn!(error = %error, "Authorization was denied");
        return Err(OAuthError::AuthorizationDenied {
            error: error.clone(),
            description: query.error_description.clone(),
        });
    }

    let received = query.state.as_deref().unwrap_or_default();
    if !constant_time_compare(received, expected_state.as_ref()) {
        return Err(OAuthError::StateMismatch {
            expected: expected_state.to_string(),
            received: received.to_string(),
        });
    }

    let code = query
        .code
        .as_deref()
        .ok_or_else(|| OAuthError::InvalidCallback {
            reason: "Missing 'code' parameter".to_string(),
        })?;

    StoreCode::new(code).map_err(|e| OAuthError::InvalidCallback {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_callback_returns_code() {
        let query = AuthCallbackQuery {
            code: Some("sq0cgp-code".to_string()),
            state: Some("nonce".to_string()),
            ..Default::default()
        };

        let code = validate_callback(&query, &StateParam::from_raw("nonce")).unwrap();
        assert_eq!(code.as_ref(), "sq0cgp-code");
    }

    #[test]
    fn test_error_parameter_is_denial() {
        let query =
            AuthCallbackQuery::from_query_string("error=access_denied&error_description=user_denied&state=nonce")
                .unwrap();

        let result = validate_callback(&query, &StateParam::from_raw("nonce"));
        match result {
            Err(OAuthError::AuthorizationDenied { error, description }) => {
                assert_eq!(error, "access_denied");
                assert_eq!(description.as_deref(), Some("user_denied"));
            }
            other => panic!("Expected AuthorizationDenied, got {other:?}"),
        }
    }

    #[test]
    fn test_state_mismatch() {
        let query = AuthCallbackQuery::from_query_string("code=c&state=other").unwrap();
        let result = validate_callback(&query, &StateParam::from_raw("nonce"));
        assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));
    }

    #[test]
    fn test_missing_state_is_mismatch() {
        let query = AuthCallbackQuery::from_query_string("code=c").unwrap();
        let result = validate_callback(&query, &StateParam::from_raw("nonce"));
        assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));
    }

    #[test]
    fn test_missing_code_is_invalid() {
        let query = AuthCallbackQuery::from_query_string("state=nonce").unwrap();
        let result = validate_callback(&query, &StateParam::from_raw("nonce"));
        assert!(matches!(result, Err(OAuthError::InvalidCallback { .. })));
    }

    #[test]
    fn test_query_string_decoding() {
        let query = AuthCallbackQuery::from_query_string(
            "?code=a%2Bb&state=s&error_description=two+words&extra=1",
        )
        .unwrap();

        assert_eq!(query.code.as_deref(), Some("a+b"));
        assert_eq!(query.state.as_deref(), Some("s"));
        assert_eq!(query.error_description.as_deref(), Some("two words"));
        assert!(query.error.is_none());
    }

    #[test]
    fn test_query_string_decodes_keys() {
        let query = AuthCallbackQuery::from_query_string("co%64e=sq0cgp-abc&st%61te=xyz").unwrap();
        assert_eq!(query.code.as_deref(), Some("sq0cgp-abc"));
        assert_eq!(query.state.as_deref(), Some("xyz"));

        let query = AuthCallbackQuery::from_query_string("error%5Fdescription=denied").unwrap();
        assert_eq!(query.error_description.as_deref(), Some("denied"));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc", "abc"));
        assert!(!constant_time_compare("abc", "abd"));
        assert!(!constant_time_compare("abc", "ab"));
    }
}
