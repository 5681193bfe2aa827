//! Inbound webhook notifications.
//!
//! Square posts a small notification naming the merchant, location, event
//! type and affected entity. The entity itself must be fetched separately
//! (e.g. with [`Payment::find`](crate::rest::Payment::find)).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::webhooks::{EventType, WebhookError};

/// A parsed webhook notification.
///
/// # Example
///
/// ```rust
/// use square_api::webhooks::{EventType, WebhookEvent};
///
/// let event = WebhookEvent::from_form(
///     "merchant_id=M1&location_id=L1&event_type=PAYMENT_UPDATED&entity_id=P1",
/// )
/// .unwrap();
///
/// assert_eq!(event.location_id, "L1");
/// assert_eq!(event.event_type(), Some(EventType::PaymentUpdated));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// The merchant the event belongs to.
    pub merchant_id: String,
    /// The location the event happened at.
    pub location_id: String,
    /// The raw event type name.
    pub event_type: String,
    /// The ID of the changed entity, e.g. a payment ID.
    pub entity_id: String,
}

impl WebhookEvent {
    /// Parses a form-encoded notification body.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::InvalidPayload`] if a field is missing or empty
    /// - [`WebhookError::MalformedPayload`] if a value is not valid
    ///   percent-encoded UTF-8
    pub fn from_form(body: &str) -> Result<Self, WebhookError> {
        let mut fields = Map::new();

        for pair in body.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            fields.insert(
                decode_form_component(key)?,
                Value::String(decode_form_component(value)?),
            );
        }

        Self::from_fields(&fields)
    }

    /// Parses a JSON notification body.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::InvalidPayload`] if a field is missing, empty or not a string
    /// - [`WebhookError::MalformedPayload`] if the body is not a JSON object
    pub fn from_json(body: &[u8]) -> Result<Self, WebhookError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| WebhookError::MalformedPayload {
                message: e.to_string(),
            })?;

        let Value::Object(fields) = value else {
            return Err(WebhookError::MalformedPayload {
                message: "expected a JSON object".to_string(),
            });
        };

        Self::from_fields(&fields)
    }

    /// The event type, if it is one this crate knows.
    #[must_use]
    pub fn event_type(&self) -> Option<EventType> {
        self.event_type.parse().ok()
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, WebhookError> {
        Ok(Self {
            merchant_id: required(fields, "merchant_id")?,
            location_id: required(fields, "location_id")?,
            event_type: required(fields, "event_type")?,
            entity_id: required(fields, "entity_id")?,
        })
    }
}

fn decode_form_component(text: &str) -> Result<String, WebhookError> {
    urlencoding::decode(&text.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|e| WebhookError::MalformedPayload {
            message: e.to_string(),
        })
}

fn required(fields: &Map<String, Value>, field: &'static str) -> Result<String, WebhookError> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .ok_or(WebhookError::InvalidPayload { field })
}
