//! Integration tests for webhook registration and inbound notifications.

use square_api::clients::RestClient;
use square_api::webhooks::{
    compute_signature, register_webhook, verify_notification, EventSelection, EventType,
    NotificationRequest, WebhookError, WebhookEvent,
};
use square_api::{ApiHost, ClientId, ClientSecret, SquareConfig, WebhookSignatureKey};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NOTIFICATION_URL: &str = "https://merchant.example.com/square/notifications";
const SIGNATURE_KEY: &str = "sq-signature-key";

fn config_for(host: &str) -> SquareConfig {
    SquareConfig::builder()
        .client_id(ClientId::new("sq0idp-app").unwrap())
        .client_secret(ClientSecret::new("sq0csp-secret").unwrap())
        .api_host(ApiHost::new(host).unwrap())
        .webhook_signature_key(WebhookSignatureKey::new(SIGNATURE_KEY).unwrap())
        .webhook_notification_url(NOTIFICATION_URL)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_register_then_receive_payment_notification() {
    let server = MockServer::start().await;
    let config = config_for(&server.uri());

    Mock::given(method("PUT"))
        .and(path("/v1/L1/webhooks"))
        .and(header("authorization", "Bearer merchant-token"))
        .and(body_string(r#"["PAYMENT_UPDATED"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["PAYMENT_UPDATED"]"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config, "merchant-token").unwrap();
    let subscribed = register_webhook(&client, "L1", &EventSelection::payments())
        .await
        .unwrap();
    assert_eq!(subscribed, vec![EventType::PaymentUpdated]);

    let body = br#"{"merchant_id":"M1","location_id":"L1","event_type":"PAYMENT_UPDATED","entity_id":"P42"}"#;
    let signature = compute_signature(SIGNATURE_KEY, NOTIFICATION_URL, body).unwrap();
    let request = NotificationRequest::new(body.to_vec(), signature);

    let event = verify_notification(&config, &request).unwrap();
    assert_eq!(event.location_id, "L1");
    assert_eq!(event.entity_id, "P42");
    assert_eq!(event.event_type(), Some(EventType::PaymentUpdated));
}

#[tokio::test]
async fn test_unsubscribe_sends_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/L1/webhooks"))
        .and(body_string("[]"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server.uri()), "merchant-token").unwrap();
    let subscribed = register_webhook(&client, "L1", &EventSelection::default())
        .await
        .unwrap();
    assert!(subscribed.is_empty());
}

#[tokio::test]
async fn test_registration_rejected_status_is_surfaced() {
    for status in [400_u16, 401, 403, 500] {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/L1/webhooks"))
            .respond_with(ResponseTemplate::new(status).set_body_string("denied"))
            .mount(&server)
            .await;

        let client = RestClient::new(&config_for(&server.uri()), "merchant-token").unwrap();
        let result = register_webhook(&client, "L1", &EventSelection::payments()).await;

        match result {
            Err(WebhookError::RegistrationRejected { status: got, .. }) => assert_eq!(got, status),
            other => panic!("Expected RegistrationRejected for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_registration_transport_failure() {
    let client = RestClient::new(&config_for("http://127.0.0.1:1"), "merchant-token").unwrap();
    let result = register_webhook(&client, "L1", &EventSelection::payments()).await;
    assert!(matches!(result, Err(WebhookError::Rest(_))));
}

#[test]
fn test_tampered_notification_is_rejected() {
    let config = config_for("https://connect.squareup.com");
    let body = br#"{"merchant_id":"M1","location_id":"L1","event_type":"PAYMENT_UPDATED","entity_id":"P42"}"#;
    let signature = compute_signature(SIGNATURE_KEY, NOTIFICATION_URL, body).unwrap();

    let tampered = br#"{"merchant_id":"M1","location_id":"L2","event_type":"PAYMENT_UPDATED","entity_id":"P42"}"#;
    let request = NotificationRequest::new(tampered.to_vec(), signature);

    assert!(matches!(
        verify_notification(&config, &request),
        Err(WebhookError::InvalidSignature)
    ));
}

#[test]
fn test_signed_notification_missing_location_is_invalid() {
    let config = config_for("https://connect.squareup.com");
    let body = br#"{"merchant_id":"M1","event_type":"PAYMENT_UPDATED","entity_id":"P42"}"#;
    let signature = compute_signature(SIGNATURE_KEY, NOTIFICATION_URL, body).unwrap();
    let request = NotificationRequest::new(body.to_vec(), signature);

    assert!(matches!(
        verify_notification(&config, &request),
        Err(WebhookError::InvalidPayload {
            field: "location_id"
        })
    ));
}

#[test]
fn test_form_and_json_notifications_agree() {
    let from_form = WebhookEvent::from_form(
        "merchant_id=M1&location_id=L1&event_type=PAYMENT_UPDATED&entity_id=P42",
    )
    .unwrap();
    let from_json = WebhookEvent::from_json(
        br#"{"merchant_id":"M1","location_id":"L1","event_type":"PAYMENT_UPDATED","entity_id":"P42"}"#,
    )
    .unwrap();

    assert_eq!(from_form, from_json);
}
