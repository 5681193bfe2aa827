//! HTTP client types for Square API communication.
//!
//! Every component in the SDK talks to Square through the same contract:
//! one base host, `Accept: application/json` on every request, JSON bodies
//! with `Content-Type` and `Content-Length` on writes, and either
//! `Bearer <access token>` or `Client <secret>` authorization.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A received response, whatever its status
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`Authorization`]: The authorization header scheme
//! - [`PaginationInfo`]: Next-page information from the `Link` header
//! - [`RestClient`]: Bearer-authenticated client for resource endpoints
//!
//! # Retry Behavior
//!
//! There is none. Each call sends exactly one request; a timeout or
//! connection failure is returned to the caller as [`HttpError::Network`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{Authorization, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo};
pub use rest::{RestClient, RestError};
