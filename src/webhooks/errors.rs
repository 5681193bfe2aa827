//! Error types for webhook operations.

use crate::clients::RestError;
use thiserror::Error;

/// Errors from webhook registration and inbound notification handling.
///
/// # Example
///
/// ```rust
/// use square_api::webhooks::WebhookError;
///
/// let error = WebhookError::RegistrationRejected {
///     status: 403,
///     message: "Forbidden".to_string(),
/// };
/// assert!(error.to_string().contains("403"));
/// ```
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Square refused the subscription change (status 400 or above).
    #[error("Webhook registration rejected with status {status}: {message}")]
    RegistrationRejected {
        /// The HTTP status code.
        status: u16,
        /// The response body.
        message: String,
    },

    /// The registration request was not sent or no response was received.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// A required notification field is missing or empty.
    #[error("Webhook payload is missing field '{field}'")]
    InvalidPayload {
        /// The missing field.
        field: &'static str,
    },

    /// The notification body could not be parsed at all.
    #[error("Malformed webhook payload: {message}")]
    MalformedPayload {
        /// The parser's message.
        message: String,
    },

    /// The signature header does not match the body.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// No webhook signature key is configured.
    #[error("Webhook signature key is not configured. Set it with SquareConfigBuilder::webhook_signature_key().")]
    SignatureKeyNotConfigured,

    /// No notification URL is configured.
    #[error("Webhook notification URL is not configured. Set it with SquareConfigBuilder::webhook_notification_url().")]
    NotificationUrlNotConfigured,
}

// Verify WebhookError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebhookError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_payload_names_field() {
        let error = WebhookError::InvalidPayload {
            field: "location_id",
        };
        assert_eq!(
            error.to_string(),
            "Webhook payload is missing field 'location_id'"
        );
    }

    #[test]
    fn test_configuration_errors_point_at_builder() {
        assert!(WebhookError::SignatureKeyNotConfigured
            .to_string()
            .contains("webhook_signature_key()"));
        assert!(WebhookError::NotificationUrlNotConfigured
            .to_string()
            .contains("webhook_notification_url()"));
    }

    #[test]
    fn test_rest_error_converts() {
        let error: WebhookError = RestError::MissingAccessToken.into();
        assert!(matches!(error, WebhookError::Rest(_)));
    }
}
