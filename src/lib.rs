//! # Square API Rust SDK
//!
//! A Rust SDK for the Square Connect API: OAuth token handling, webhook
//! subscriptions, and read access to locations and payments.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`SquareConfig`] and [`SquareConfigBuilder`]
//! - Validated newtypes for credentials and the API host
//! - OAuth authorization URL, callback validation, code exchange and token
//!   refresh via [`auth::oauth`]
//! - Single-flight token refresh via [`auth::oauth::RefreshCoordinator`]
//! - Webhook registration and notification verification via [`webhooks`]
//! - Locations and payments via [`rest`]
//!
//! Every network operation is an `async fn` that sends exactly one request.
//! Nothing is retried, and nothing is stored: the caller owns the
//! [`AccessTokenState`](auth::AccessTokenState).
//!
//! ## Quick Start
//!
//! ```rust
//! use square_api::{SquareConfig, ClientId, ClientSecret, StoreCode};
//!
//! let config = SquareConfig::builder()
//!     .client_id(ClientId::new("sq0idp-app").unwrap())
//!     .client_secret(ClientSecret::new("sq0csp-secret").unwrap())
//!     .store_code(StoreCode::new("sq0cgp-code").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Token Exchange and Refresh
//!
//! ```rust,ignore
//! use square_api::auth::oauth::{exchange_authorization_code, refresh_access_token};
//!
//! let mut state = exchange_authorization_code(&config).await?;
//!
//! // Later, before it expires
//! if state.expires_within(chrono::Duration::days(7)) {
//!     if let Some(refresh_token) = state.refresh_token.clone() {
//!         state = refresh_access_token(&config, &refresh_token).await?;
//!     }
//! }
//! ```
//!
//! ## Reading Resources and Registering Webhooks
//!
//! ```rust,ignore
//! use square_api::clients::RestClient;
//! use square_api::rest::{Location, Payment, PaymentListParams};
//! use square_api::webhooks::{register_webhook, EventSelection};
//!
//! let client = RestClient::new(&config, &state.access_token)?;
//!
//! for location in Location::all(&client).await? {
//!     register_webhook(&client, &location.id, &EventSelection::payments()).await?;
//!     let payments = Payment::all(&client, &location.id, &PaymentListParams::default()).await?;
//!     println!("{}: {} recent payments", location.name, payments.len());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use auth::{AccessTokenState, Permissions, TokenResponse};
pub use config::{
    ApiHost, ClientId, ClientSecret, SquareConfig, SquareConfigBuilder, StoreCode,
    WebhookSignatureKey,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Authorization, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, PaginationInfo, RestClient, RestError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    authorize_url, exchange_authorization_code, exchange_code, refresh_access_token,
    validate_callback, AuthCallbackQuery, AuthorizeResult, OAuthError, RefreshCoordinator,
    StateParam,
};

pub use rest::{Location, Money, Payment, PaymentListParams, PaymentPage, ResourceError};
pub use webhooks::{register_webhook, EventSelection, EventType, WebhookError, WebhookEvent};
