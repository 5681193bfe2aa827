//! Authentication types for the Square API SDK.
//!
//! # Overview
//!
//! - [`AccessTokenState`]: The credential held by the caller after an exchange or refresh
//! - [`TokenResponse`]: The token endpoint's response body
//! - [`Permissions`]: OAuth permissions requested on the authorization URL
//! - [`oauth`]: Authorization URL, callback validation, token exchange and refresh
//!
//! # Token Lifecycle
//!
//! ```rust,ignore
//! use square_api::auth::oauth::{exchange_authorization_code, refresh_access_token};
//!
//! // 1. Exchange the authorization code held in the config
//! let state = exchange_authorization_code(&config).await?;
//!
//! // 2. Refresh before expiry
//! if state.expires_within(chrono::Duration::days(7)) {
//!     if let Some(refresh_token) = &state.refresh_token {
//!         let state = refresh_access_token(&config, refresh_token).await?;
//!     }
//! }
//! ```

pub mod oauth;
mod permissions;
mod token_state;

pub use permissions::Permissions;
pub use token_state::{AccessTokenState, TokenResponse};
