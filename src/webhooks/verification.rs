//! Webhook notification signature verification.
//!
//! Square signs each notification with the subscription's signature key:
//! HMAC-SHA256 over the notification URL followed by the raw body,
//! base64-encoded, sent in the [`HEADER_SIGNATURE`] header.
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::webhooks::{verify_notification, NotificationRequest, HEADER_SIGNATURE};
//!
//! let request = NotificationRequest::new(body_bytes, signature_header_value);
//! match verify_notification(&config, &request) {
//!     Ok(event) => println!("{} changed at {}", event.entity_id, event.location_id),
//!     Err(e) => return Err(e),
//! }
//! ```

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::SquareConfig;
use crate::webhooks::{WebhookError, WebhookEvent};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the notification signature.
pub const HEADER_SIGNATURE: &str = "X-Square-HmacSha256-Signature";

/// The parts of an inbound notification needed for verification.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    body: Vec<u8>,
    signature: String,
}

impl NotificationRequest {
    /// Creates a request from the raw body and the [`HEADER_SIGNATURE`] value.
    #[must_use]
    pub fn new(body: Vec<u8>, signature: impl Into<String>) -> Self {
        Self {
            body,
            signature: signature.into(),
        }
    }

    /// The raw body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The signature header value.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// Computes the base64 signature for a notification.
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSignature`] if the key cannot initialize the
/// MAC.
pub fn compute_signature(
    signature_key: &str,
    notification_url: &str,
    body: &[u8],
) -> Result<String, WebhookError> {
    let mut mac = HmacSha256::new_from_slice(signature_key.as_bytes())
        .map_err(|_| WebhookError::InvalidSignature)?;
    mac.update(notification_url.as_bytes());
    mac.update(body);
    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

/// Returns `true` if `signature` is valid for the URL and body.
///
/// The comparison runs in constant time.
#[must_use]
pub fn verify_signature(
    signature_key: &str,
    notification_url: &str,
    body: &[u8],
    signature: &str,
) -> bool {
    compute_signature(signature_key, notification_url, body)
        .map(|expected| expected.as_bytes().ct_eq(signature.as_bytes()).into())
        .unwrap_or(false)
}

/// Verifies a notification against the configured key and URL, then parses
/// its JSON body.
///
/// # Errors
///
/// - [`WebhookError::SignatureKeyNotConfigured`] without a signature key
/// - [`WebhookError::NotificationUrlNotConfigured`] without a notification URL
/// - [`WebhookError::InvalidSignature`] if the signature does not match
/// - Any error of [`WebhookEvent::from_json`]
pub fn verify_notification(
    config: &SquareConfig,
    request: &NotificationRequest,
) -> Result<WebhookEvent, WebhookError> {
    let key = config
        .webhook_signature_key()
        .ok_or(WebhookError::SignatureKeyNotConfigured)?;
    let url = config
        .webhook_notification_url()
        .ok_or(WebhookError::NotificationUrlNotConfigured)?;

    if !verify_signature(key.as_ref(), url, request.body(), request.signature()) {
        tracing::warn!("Rejected webhook notification with invalid signature");
        return Err(WebhookError::InvalidSignature);
    }

    WebhookEvent::from_json(request.body())
}
