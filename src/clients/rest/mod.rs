//! Authenticated REST client for the Square Connect API.
//!
//! - [`RestClient`]: wraps [`HttpClient`](crate::clients::HttpClient) and
//!   attaches `Authorization: Bearer <access token>` to every request
//! - [`RestError`]: Error type for REST client operations
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::clients::RestClient;
//!
//! let client = RestClient::new(&config, &state.access_token)?;
//! let response = client.get("v2/locations", Vec::new()).await?;
//! ```

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
