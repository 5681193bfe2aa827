//! REST client implementation.

use crate::clients::rest::RestError;
use crate::clients::{
    Authorization, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    InvalidHttpRequestError,
};
use crate::config::SquareConfig;

/// Client for Bearer-authenticated Square endpoints.
///
/// Every request carries `Authorization: Bearer <access token>`. Responses
/// are returned whatever their status; resources decide what a status means.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` and can be shared across tasks.
///
/// # Example
///
/// ```rust
/// use square_api::{ClientId, ClientSecret, SquareConfig};
/// use square_api::clients::{RestClient, RestError};
///
/// let config = SquareConfig::builder()
///     .client_id(ClientId::new("app").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(RestClient::new(&config, "access-token").is_ok());
/// assert!(matches!(RestClient::new(&config, ""), Err(RestError::MissingAccessToken)));
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    authorization: Authorization,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client for the given access token.
    ///
    /// # Errors
    ///
    /// - [`RestError::MissingAccessToken`] if the token is empty
    /// - [`RestError::Http`] if the HTTP client cannot be created
    pub fn new(config: &SquareConfig, access_token: impl Into<String>) -> Result<Self, RestError> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(RestError::MissingAccessToken);
        }

        Ok(Self {
            http_client: HttpClient::new(config)?,
            authorization: Authorization::Bearer(access_token),
        })
    }

    /// Sends a GET request with the given query parameters, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails to send.
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        for (key, value) in query {
            builder = builder.query_param(key, value);
        }
        self.send(builder.authorization(self.authorization.clone()).build())
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails to send.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .authorization(self.authorization.clone())
            .build();
        self.send(request).await
    }

    async fn send(
        &self,
        request: Result<HttpRequest, InvalidHttpRequestError>,
    ) -> Result<HttpResponse, RestError> {
        let request = request.map_err(HttpError::from)?;
        Ok(self.http_client.request(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiHost, ClientId, ClientSecret};
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(host: &str) -> SquareConfig {
        SquareConfig::builder()
            .client_id(ClientId::new("app-id").unwrap())
            .client_secret(ClientSecret::new("app-secret").unwrap())
            .api_host(ApiHost::new(host).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_debug_masks_access_token() {
        let client = RestClient::new(&config_for("https://example.com"), "secret-token").unwrap();
        assert!(!format!("{client:?}").contains("secret-token"));
    }

    #[tokio::test]
    async fn test_get_sends_bearer_and_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/L1/payments"))
            .and(header("authorization", "Bearer tok"))
            .and(query_param("limit", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RestClient::new(&config_for(&mock_server.uri()), "tok").unwrap();
        let response = client
            .get("v1/L1/payments", vec![("limit".to_string(), "200".to_string())])
            .await
            .unwrap();
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_put_sends_bearer_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/L1/webhooks"))
            .and(header("authorization", "Bearer tok"))
            .and(body_string("[]"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RestClient::new(&config_for(&mock_server.uri()), "tok").unwrap();
        let response = client.put("v1/L1/webhooks", json!([])).await.unwrap();
        assert_eq!(response.code, 200);
    }
}
