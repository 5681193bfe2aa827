//! Error types for resource reads.
//!
//! Every resource operation maps its response the same way:
//!
//! - **200**: decoded into the resource, or [`ResourceError::Decode`]
//! - **anything else**: [`ResourceError::FetchFailed`] with the status
//! - **no response**: [`ResourceError::Rest`]
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::rest::{Location, ResourceError};
//!
//! match Location::all(&client).await {
//!     Ok(locations) => println!("{} locations", locations.len()),
//!     Err(ResourceError::FetchFailed { status: 401, .. }) => {
//!         // re-authenticate
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpResponse, RestError};
use serde_json::Value;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use square_api::rest::ResourceError;
///
/// let error = ResourceError::FetchFailed {
///     resource: "Location",
///     status: 404,
///     message: "Not found".to_string(),
///     request_id: None,
/// };
/// assert_eq!(error.status(), Some(404));
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The API returned a non-200 status.
    #[error("Failed to fetch {resource}: status {status}: {message}")]
    FetchFailed {
        /// The resource type being read (e.g. "Payment").
        resource: &'static str,
        /// The HTTP status code.
        status: u16,
        /// The API's error detail, or the raw body.
        message: String,
        /// The `X-Request-Id` header, if present.
        request_id: Option<String>,
    },

    /// A 200 body did not match the resource's shape.
    #[error("Failed to decode {resource}: {message}")]
    Decode {
        /// The resource type being read.
        resource: &'static str,
        /// The decoder's message.
        message: String,
    },

    /// The request was not sent or no response was received.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Builds a [`FetchFailed`](Self::FetchFailed) from a non-200 response.
    #[must_use]
    pub fn from_http_response(response: &HttpResponse, resource: &'static str) -> Self {
        Self::FetchFailed {
            resource,
            status: response.code,
            message: error_message(&response.body),
            request_id: response.request_id().map(ToString::to_string),
        }
    }

    /// The HTTP status, for errors that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::FetchFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The request ID, for errors that carry one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::FetchFailed { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

/// Extracts the message from either error format.
///
/// v2 endpoints answer `{"errors":[{"detail": ...}]}`, v1 endpoints
/// `{"type": ..., "message": ...}`.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    value
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|error| error.get("detail"))
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| body.to_string(), ToString::to_string)
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        HttpResponse::new(code, headers, body.to_string())
    }

    #[test]
    fn test_v2_error_detail_is_extracted() {
        let error = ResourceError::from_http_response(
            &response(
                401,
                r#"{"errors":[{"category":"AUTHENTICATION_ERROR","code":"UNAUTHORIZED","detail":"This request could not be authorized."}]}"#,
            ),
            "Location",
        );

        match error {
            ResourceError::FetchFailed {
                resource,
                status,
                message,
                request_id,
            } => {
                assert_eq!(resource, "Location");
                assert_eq!(status, 401);
                assert_eq!(message, "This request could not be authorized.");
                assert_eq!(request_id.as_deref(), Some("req-9"));
            }
            other => panic!("Expected FetchFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_v1_error_message_is_extracted() {
        let error = ResourceError::from_http_response(
            &response(404, r#"{"type":"not_found","message":"NotFound"}"#),
            "Payment",
        );
        assert!(error.to_string().ends_with("NotFound"));
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_non_json_body_is_kept_raw() {
        let error = ResourceError::from_http_response(&response(502, "Bad Gateway"), "Payment");
        assert!(error.to_string().ends_with("Bad Gateway"));
    }

    #[test]
    fn test_decode_has_no_status() {
        let error = ResourceError::Decode {
            resource: "Payment",
            message: "expected value".to_string(),
        };
        assert_eq!(error.status(), None);
        assert_eq!(error.request_id(), None);
    }
}
