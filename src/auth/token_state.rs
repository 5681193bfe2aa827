//! Access token state for Square API authentication.
//!
//! This module provides [`TokenResponse`], the wire shape returned by the
//! token endpoint, and [`AccessTokenState`], the caller-held credential built
//! from it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Response body of the `oauth2/token` endpoint.
///
/// `refresh_token` is only issued under the refresh-token grant.
///
/// # Example
///
/// ```rust
/// use square_api::auth::TokenResponse;
///
/// let json = r#"{
///     "access_token": "abc",
///     "token_type": "bearer",
///     "expires_at": "2025-01-01T00:00:00Z",
///     "merchant_id": "M1"
/// }"#;
///
/// let response: TokenResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.merchant_id, "M1");
/// assert!(response.refresh_token.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The access token.
    pub access_token: String,
    /// The token type, `bearer`.
    pub token_type: String,
    /// When the access token expires.
    pub expires_at: DateTime<Utc>,
    /// The merchant the token was issued for.
    pub merchant_id: String,
    /// The refresh token, when the grant issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// The credential a caller holds after a successful exchange or refresh.
///
/// The state is replaced wholesale by every refresh, never patched. The SDK
/// does not enforce expiry: check [`expired`](Self::expired) or
/// [`expires_within`](Self::expires_within) and refresh before using it.
///
/// `AccessTokenState` serializes with serde so callers can persist it in
/// whatever store they use.
///
/// # Thread Safety
///
/// `AccessTokenState` is `Send + Sync`. The SDK provides no locking around it;
/// callers that share one must serialize their own refreshes, or go through
/// [`RefreshCoordinator`](crate::auth::oauth::RefreshCoordinator).
///
/// # Example
///
/// ```rust
/// use square_api::auth::AccessTokenState;
/// use chrono::{Duration, Utc};
///
/// let state = AccessTokenState {
///     access_token: "token".to_string(),
///     token_type: "bearer".to_string(),
///     refresh_token: None,
///     merchant_id: "M1".to_string(),
///     expires_at: Utc::now() + Duration::days(30),
/// };
///
/// assert!(state.is_active());
/// assert!(!state.expires_within(Duration::days(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenState {
    /// The access token for API authentication.
    pub access_token: String,
    /// The token type, `bearer`.
    pub token_type: String,
    /// The refresh token, if the grant issued one.
    pub refresh_token: Option<String>,
    /// The merchant the token belongs to.
    pub merchant_id: String,
    /// When the access token expires.
    pub expires_at: DateTime<Utc>,
}

impl AccessTokenState {
    /// Returns `true` if the access token has expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Returns `true` if the access token expires within `window` from now.
    #[must_use]
    pub fn expires_within(&self, window: Duration) -> bool {
        Utc::now() + window >= self.expires_at
    }

    /// Returns `true` if the token is non-empty and not expired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

impl From<TokenResponse> for AccessTokenState {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            refresh_token: response.refresh_token,
            merchant_id: response.merchant_id,
            expires_at: response.expires_at,
        }
    }
}

// Verify AccessTokenState is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessTokenState>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn state_expiring_at(expires_at: DateTime<Utc>) -> AccessTokenState {
        AccessTokenState {
            access_token: "token".to_string(),
            token_type: "bearer".to_string(),
            refresh_token: Some("refresh".to_string()),
            merchant_id: "M1".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_token_response_decodes_without_refresh_token() {
        let json = r#"{"access_token":"abc","token_type":"bearer","expires_at":"2025-01-01T00:00:00Z","merchant_id":"M1"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.access_token, "abc");
        assert_eq!(response.token_type, "bearer");
        assert_eq!(
            response.expires_at,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(response.merchant_id, "M1");
        assert!(response.refresh_token.is_none());
    }

    #[test]
    fn test_token_response_round_trip_with_refresh_token() {
        let original = TokenResponse {
            access_token: "abc".to_string(),
            token_type: "bearer".to_string(),
            expires_at: Utc.with_ymd_and_hms(2030, 6, 1, 12, 30, 0).unwrap(),
            merchant_id: "M1".to_string(),
            refresh_token: Some("r1".to_string()),
        };

        let json = serde_json::to_string(&original).unwrap();
        let decoded: TokenResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_token_response_rejects_missing_merchant_id() {
        let json = r#"{"access_token":"abc","token_type":"bearer","expires_at":"2025-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }

    #[test]
    fn test_state_from_response_keeps_every_field() {
        let response = TokenResponse {
            access_token: "abc".to_string(),
            token_type: "bearer".to_string(),
            expires_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            merchant_id: "M1".to_string(),
            refresh_token: Some("r1".to_string()),
        };

        let state = AccessTokenState::from(response.clone());
        assert_eq!(state.access_token, response.access_token);
        assert_eq!(state.refresh_token, response.refresh_token);
        assert_eq!(state.merchant_id, response.merchant_id);
        assert_eq!(state.expires_at, response.expires_at);
    }

    #[test]
    fn test_expiry_checks() {
        let expired = state_expiring_at(Utc::now() - Duration::hours(1));
        assert!(expired.expired());
        assert!(!expired.is_active());

        let valid = state_expiring_at(Utc::now() + Duration::hours(1));
        assert!(!valid.expired());
        assert!(valid.is_active());
        assert!(valid.expires_within(Duration::hours(2)));
        assert!(!valid.expires_within(Duration::minutes(30)));
    }

    #[test]
    fn test_empty_token_is_not_active() {
        let mut state = state_expiring_at(Utc::now() + Duration::hours(1));
        state.access_token.clear();
        assert!(!state.is_active());
    }
}
