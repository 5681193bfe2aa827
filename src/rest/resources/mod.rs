//! Square resources readable with a merchant access token.
//!
//! - [`Location`]: merchant locations (`v2/locations`)
//! - [`Payment`]: payments per location (`v1/{location_id}/payments`)
//! - [`Money`]: decimal amounts with currency

mod location;
mod money;
mod payment;

pub use location::Location;
pub use money::Money;
pub use payment::{Payment, PaymentListParams, PaymentPage, PAYMENTS_PAGE_LIMIT};
