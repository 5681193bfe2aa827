//! OAuth 2.0 for Square applications.
//!
//! # Authorization Code Flow
//!
//! 1. **Authorization** ([`authorize_url`]): build the URL the merchant is
//!    redirected to, and keep the returned [`StateParam`].
//! 2. **Callback** ([`validate_callback`]): check the redirect's query and
//!    extract the authorization code.
//! 3. **Exchange** ([`exchange_code`] or [`exchange_authorization_code`]):
//!    trade the code for an [`AccessTokenState`](crate::auth::AccessTokenState).
//! 4. **Refresh** ([`refresh_access_token`]): renew the access token with the
//!    refresh token before it expires.
//!
//! Every network operation sends exactly one request and never retries.
//!
//! # Security
//!
//! - **CSRF Protection**: the state parameter must round-trip unchanged
//! - **Constant-Time Comparison**: state values are compared in constant time
//! - **Secret Handling**: the client secret never appears in logs or `Debug` output
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::{ClientId, ClientSecret, SquareConfig};
//! use square_api::auth::Permissions;
//! use square_api::auth::oauth::{
//!     authorize_url, exchange_code, validate_callback, AuthCallbackQuery,
//! };
//!
//! let config = SquareConfig::builder()
//!     .client_id(ClientId::new("sq0idp-app").unwrap())
//!     .client_secret(ClientSecret::new("sq0csp-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let authorize = authorize_url(&config, &Permissions::default_read(), false);
//! // Redirect to authorize.url, store authorize.state
//!
//! // On the redirect:
//! let query = AuthCallbackQuery::from_query_string(raw_query)?;
//! let code = validate_callback(&query, &authorize.state)?;
//! let state = exchange_code(&config, &code).await?;
//! ```

mod authorize;
mod callback;
mod error;
mod state;
mod token_exchange;
mod token_refresh;

pub use authorize::{authorize_url, AuthorizeResult};
pub use callback::{constant_time_compare, validate_callback, AuthCallbackQuery};
pub use error::OAuthError;
pub use state::StateParam;
pub use token_exchange::{exchange_authorization_code, exchange_code};
pub use token_refresh::{refresh_access_token, RefreshCoordinator};
