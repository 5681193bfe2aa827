//! Webhook subscription registration.
//!
//! A location's subscription is set with a single
//! `PUT v1/{location_id}/webhooks` whose body is the JSON array of event type
//! names. The request replaces the previous subscription.
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::clients::RestClient;
//! use square_api::webhooks::{register_webhook, EventSelection};
//!
//! let client = RestClient::new(&config, &state.access_token)?;
//! let subscribed = register_webhook(&client, "L1", &EventSelection::payments()).await?;
//! ```

use crate::clients::RestClient;
use crate::webhooks::{EventSelection, EventType, WebhookError};

/// Sets the event types Square notifies the configured endpoint about for a
/// location.
///
/// Returns the event types that were requested. The response body is not
/// interpreted.
///
/// # Errors
///
/// - [`WebhookError::RegistrationRejected`] if Square answers with status 400
///   or above
/// - [`WebhookError::Rest`] if no response was received
pub async fn register_webhook(
    client: &RestClient,
    location_id: &str,
    selection: &EventSelection,
) -> Result<Vec<EventType>, WebhookError> {
    let path = format!("v1/{}/webhooks", urlencoding::encode(location_id));
    let response = client.put(&path, selection.to_body()).await?;

    if response.is_error() {
        return Err(WebhookError::RegistrationRejected {
            status: response.code,
            message: response.body,
        });
    }

    let event_types = selection.event_types();
    tracing::debug!(
        location_id = %location_id,
        event_types = ?event_types,
        "Webhook subscription updated"
    );
    Ok(event_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiHost, ClientId, ClientSecret};
    use crate::SquareConfig;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(host: &str) -> RestClient {
        let config = SquareConfig::builder()
            .client_id(ClientId::new("app-id").unwrap())
            .client_secret(ClientSecret::new("app-secret").unwrap())
            .api_host(ApiHost::new(host).unwrap())
            .build()
            .unwrap();
        RestClient::new(&config, "tok").unwrap()
    }

    #[tokio::test]
    async fn test_registers_payment_updated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/L1/webhooks"))
            .and(header("authorization", "Bearer tok"))
            .and(header("content-type", "application/json"))
            .and(body_string(r#"["PAYMENT_UPDATED"]"#))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"["PAYMENT_UPDATED"]"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let subscribed = register_webhook(
            &client_for(&mock_server.uri()),
            "L1",
            &EventSelection::payments(),
        )
        .await
        .unwrap();
        assert_eq!(subscribed, vec![EventType::PaymentUpdated]);
    }

    #[tokio::test]
    async fn test_empty_selection_sends_empty_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/L1/webhooks"))
            .and(body_string("[]"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let subscribed = register_webhook(
            &client_for(&mock_server.uri()),
            "L1",
            &EventSelection::default(),
        )
        .await
        .unwrap();
        assert!(subscribed.is_empty());
    }

    #[tokio::test]
    async fn test_body_is_not_interpreted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/L1/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = register_webhook(
            &client_for(&mock_server.uri()),
            "L1",
            &EventSelection::payments(),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_rejected_registration() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/L1/webhooks"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&mock_server)
            .await;

        let result = register_webhook(
            &client_for(&mock_server.uri()),
            "L1",
            &EventSelection::payments(),
        )
        .await;

        match result {
            Err(WebhookError::RegistrationRejected { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Forbidden");
            }
            other => panic!("Expected RegistrationRejected, got {other:?}"),
        }
    }
}
