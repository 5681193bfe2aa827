//! HTTP response types for the Square API SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Pagination information parsed from the `Link` header.
///
/// The v1 list endpoints page with a `batch_token` carried in the URL of the
/// `rel="next"` link. Square quotes the relation with single quotes, so both
/// quote styles are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The full URL of the next page, if any.
    pub next_url: Option<String>,
    /// The `batch_token` of the next page, if any.
    pub next_batch_token: Option<String>,
}

impl PaginationInfo {
    /// Parses pagination info from a `Link` header value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use square_api::clients::PaginationInfo;
    ///
    /// let link = "<https://connect.squareup.com/v1/L1/payments?batch_token=abc>;rel='next'";
    /// let info = PaginationInfo::parse_link_header(link);
    /// assert_eq!(info.next_batch_token.as_deref(), Some("abc"));
    /// ```
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';');

            let url = parts
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));

            let rel = parts.find_map(|part| {
                part.trim()
                    .strip_prefix("rel=")
                    .map(|rel| rel.trim_matches(|c| c == '"' || c == '\''))
            });

            if let (Some("next"), Some(url)) = (rel, url) {
                result.next_batch_token = Self::extract_query_value(url, "batch_token");
                result.next_url = Some(url.to_string());
            }
        }

        result
    }

    fn extract_query_value(url: &str, name: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;

        query.split('&').find_map(|param| {
            let (key, value) = param.split_once('=')?;
            if key == name {
                urlencoding::decode(value).ok().map(|v| v.into_owned())
            } else {
                None
            }
        })
    }
}

/// An HTTP response from the Square API.
///
/// The body is kept as received so each operation can decode it into its own
/// type and report decode failures separately from status failures.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is exactly 200.
    ///
    /// Every read and token operation treats anything other than 200 as a
    /// failure, including other 2xx codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns `true` for 4xx and 5xx status codes.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns pagination info parsed from the `Link` header.
    #[must_use]
    pub fn pagination(&self) -> PaginationInfo {
        self.header("link")
            .map(PaginationInfo::parse_link_header)
            .unwrap_or_default()
    }
}
