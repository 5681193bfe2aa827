//! HTTP request types for the Square API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Square API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Square API operations in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method, used by the token endpoint.
    Post,
    /// HTTP PUT method, used to replace webhook subscriptions.
    Put,
}

impl HttpMethod {
    /// Returns `true` for methods that must carry a body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// The `Authorization` header scheme for a request.
///
/// Token endpoint calls authenticate the application with `Client <secret>`;
/// every other call authenticates the merchant with `Bearer <access token>`.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    /// `Authorization: Bearer <access token>`.
    Bearer(String),
    /// `Authorization: Client <client secret>`.
    Client(String),
}

impl Authorization {
    /// Returns the full header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::Client(secret) => format!("Client {secret}"),
        }
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(*****)"),
            Self::Client(_) => f.write_str("Client(*****)"),
        }
    }
}

/// An HTTP request to be sent to the Square API.
///
/// Bodies are always JSON. Query parameters keep their insertion order.
///
/// # Example
///
/// ```rust
/// use square_api::clients::{Authorization, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Put, "v1/L1/webhooks")
///     .body(json!(["PAYMENT_UPDATED"]))
///     .authorization(Authorization::Bearer("token".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "v1/L1/webhooks");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, relative to the API host, for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL, in order.
    pub query: Vec<(String, String)>,
    /// The `Authorization` header to send, if any.
    pub authorization: Option<Authorization>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
    authorization: Option<Authorization>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            authorization: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the `Authorization` header.
    #[must_use]
    pub fn authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            authorization: self.authorization,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "v2/locations")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "v2/locations");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert!(request.authorization.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "oauth2/token").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_body_for_put() {
        let result = HttpRequest::builder(HttpMethod::Put, "v1/L1/webhooks").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "/").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }

    #[test]
    fn test_empty_array_body_is_accepted_for_put() {
        let request = HttpRequest::builder(HttpMethod::Put, "v1/L1/webhooks")
            .body(json!([]))
            .build()
            .unwrap();
        assert_eq!(request.body, Some(json!([])));
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "v1/L1/payments")
            .query_param("order", "DESC")
            .query_param("limit", "200")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("order".to_string(), "DESC".to_string()),
                ("limit".to_string(), "200".to_string()),
            ]
        );
    }

    #[test]
    fn test_authorization_header_values_and_masking() {
        let bearer = Authorization::Bearer("tok".to_string());
        let client = Authorization::Client("sec".to_string());

        assert_eq!(bearer.header_value(), "Bearer tok");
        assert_eq!(client.header_value(), "Client sec");
        assert_eq!(format!("{bearer:?}"), "Bearer(*****)");
        assert!(!format!("{client:?}").contains("sec"));
    }
}
