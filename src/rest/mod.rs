//! Read-only access to Square resources.
//!
//! Resources are read with a [`RestClient`](crate::clients::RestClient)
//! carrying a merchant access token. Every operation sends one GET request;
//! status 200 is decoded, anything else is [`ResourceError::FetchFailed`].
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::clients::RestClient;
//! use square_api::rest::{Location, Payment, PaymentListParams};
//!
//! let client = RestClient::new(&config, &state.access_token)?;
//!
//! for location in Location::all(&client).await? {
//!     let mut params = PaymentListParams::since(yesterday);
//!     loop {
//!         let page = Payment::page(&client, &location.id, &params).await?;
//!         for payment in &page.payments {
//!             println!("{}: {}", payment.id, payment.net_total_money);
//!         }
//!         match page.next_batch_token {
//!             Some(token) => params = params.with_batch_token(token),
//!             None => break,
//!         }
//!     }
//! }
//! ```

mod errors;
pub mod resources;

pub use errors::ResourceError;
pub use resources::{Location, Money, Payment, PaymentListParams, PaymentPage, PAYMENTS_PAGE_LIMIT};
