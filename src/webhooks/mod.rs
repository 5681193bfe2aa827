//! Webhooks for the Square API SDK.
//!
//! # Overview
//!
//! - [`register_webhook`]: set a location's subscribed event types
//! - [`EventSelection`] and [`EventType`]: what to subscribe to
//! - [`WebhookEvent`]: a parsed inbound notification
//! - [`verify_notification`]: check a notification's signature and parse it
//! - [`WebhookError`]: Error types for webhook operations
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::clients::RestClient;
//! use square_api::webhooks::{register_webhook, verify_notification, EventSelection, NotificationRequest};
//!
//! // Subscribe once per location
//! let client = RestClient::new(&config, &state.access_token)?;
//! register_webhook(&client, &location.id, &EventSelection::payments()).await?;
//!
//! // In the notification handler
//! let request = NotificationRequest::new(body, signature_header);
//! let event = verify_notification(&config, &request)?;
//! ```

mod errors;
mod event;
mod registration;
mod types;
mod verification;

pub use errors::WebhookError;
pub use event::WebhookEvent;
pub use registration::register_webhook;
pub use types::{EventSelection, EventType};
pub use verification::{
    compute_signature, verify_notification, verify_signature, NotificationRequest,
    HEADER_SIGNATURE,
};
