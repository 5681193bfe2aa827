//! Location resource.
//!
//! A location is one of a merchant's physical or online points of sale.
//! Payments and webhook subscriptions are scoped by location ID.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::ResourceError;

/// A merchant location.
///
/// # Example
///
/// ```rust
/// use square_api::rest::Location;
///
/// let json = r#"{"id":"L1","name":"Main St","country":"US","business_name":"Cafe"}"#;
/// let location: Location = serde_json::from_str(json).unwrap();
/// assert_eq!(location.country_code, "US");
/// assert!(location.email.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// The location ID.
    pub id: String,

    /// The location's display name.
    pub name: String,

    /// ISO 3166 country code.
    #[serde(rename = "country")]
    pub country_code: String,

    /// The business name shown to customers.
    #[serde(default)]
    pub business_name: String,

    /// Contact email, when set.
    #[serde(rename = "business_email", alias = "email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response envelope of `GET v2/locations`.
#[derive(Debug, Deserialize)]
struct LocationList {
    #[serde(default)]
    locations: Vec<Location>,
}

impl Location {
    /// Resource name used in errors.
    pub const NAME: &'static str = "Location";

    const PATH: &'static str = "v2/locations";

    /// Lists every location of the authorized merchant.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::FetchFailed`] for any non-200 status
    /// - [`ResourceError::Decode`] if the body is not a location list
    /// - [`ResourceError::Rest`] if no response was received
    pub async fn all(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        let response = client.get(Self::PATH, Vec::new()).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(&response, Self::NAME));
        }

        let list: LocationList = response.json().map_err(|e| ResourceError::Decode {
            resource: Self::NAME,
            message: e.to_string(),
        })?;

        tracing::debug!(count = list.locations.len(), "Fetched locations");
        Ok(list.locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiHost, ClientId, ClientSecret};
    use crate::SquareConfig;
    use wiremock::matchers::{header, method, path};
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

    #[test]
    fn test_round_trip_keeps_every_field() {
        let location = Location {
            id: "L1".to_string(),
            name: "Main St".to_string(),
            country_code: "US".to_string(),
            business_name: "Cafe".to_string(),
            email: Some("owner@example.com".to_string()),
        };

        let json = serde_json::to_string(&location).unwrap();
        assert!(json.contains("\"country\":\"US\""));
        let decoded: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, location);
    }

    #[tokio::test]
    async fn test_all_decodes_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/locations"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"locations":[
                    {"id":"L1","name":"Main St","country":"US","business_name":"Cafe"},
                    {"id":"L2","name":"Online","country":"CA","business_name":"Cafe","business_email":"web@example.com"}
                ]}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let locations = Location::all(&client_for(&mock_server.uri())).await.unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].id, "L1");
        assert_eq!(locations[1].email.as_deref(), Some("web@example.com"));
    }

    #[tokio::test]
    async fn test_all_empty_merchant() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/locations"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let locations = Location::all(&client_for(&mock_server.uri())).await.unwrap();
        assert!(locations.is_empty());
    }

    #[tokio::test]
    async fn test_all_404_is_fetch_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/locations"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = Location::all(&client_for(&mock_server.uri())).await;
        assert!(matches!(
            result,
            Err(ResourceError::FetchFailed { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_all_malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/locations"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"locations":"nope"}"#))
            .mount(&mock_server)
            .await;

        let result = Location::all(&client_for(&mock_server.uri())).await;
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }
}
