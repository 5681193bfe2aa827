//! Webhook event types and subscription selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event types a location can subscribe to.
///
/// Only [`PaymentUpdated`](Self::PaymentUpdated) can be selected through
/// [`EventSelection`]; the other two are recognized in inbound notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A payment was created or changed.
    PaymentUpdated,
    /// Inventory levels changed.
    InventoryUpdated,
    /// A timecard changed.
    TimecardUpdated,
}

impl EventType {
    /// The wire name, e.g. `PAYMENT_UPDATED`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaymentUpdated => "PAYMENT_UPDATED",
            Self::InventoryUpdated => "INVENTORY_UPDATED",
            Self::TimecardUpdated => "TIMECARD_UPDATED",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAYMENT_UPDATED" => Ok(Self::PaymentUpdated),
            "INVENTORY_UPDATED" => Ok(Self::InventoryUpdated),
            "TIMECARD_UPDATED" => Ok(Self::TimecardUpdated),
            other => Err(format!("Unknown event type: {other}")),
        }
    }
}

/// The event types to subscribe a location to.
///
/// Registration replaces the location's whole subscription, so an empty
/// selection unsubscribes from everything.
///
/// # Example
///
/// ```rust
/// use square_api::webhooks::EventSelection;
///
/// let selection = EventSelection { payment_updated: true };
/// assert_eq!(selection.to_body().to_string(), r#"["PAYMENT_UPDATED"]"#);
///
/// let none = EventSelection::default();
/// assert_eq!(none.to_body().to_string(), "[]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSelection {
    /// Subscribe to `PAYMENT_UPDATED`.
    pub payment_updated: bool,
}

impl EventSelection {
    /// A selection with only `PAYMENT_UPDATED`.
    #[must_use]
    pub const fn payments() -> Self {
        Self {
            payment_updated: true,
        }
    }

    /// The selected event types, in wire order.
    #[must_use]
    pub fn event_types(&self) -> Vec<EventType> {
        let mut types = Vec::new();
        if self.payment_updated {
            types.push(EventType::PaymentUpdated);
        }
        types
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.payment_updated
    }

    /// The JSON array sent as the registration body.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.event_types()
                .into_iter()
                .map(|event_type| serde_json::Value::from(event_type.as_str()))
                .collect(),
        )
    }
}
