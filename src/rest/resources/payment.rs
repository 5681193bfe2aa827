//! Payment resource.
//!
//! Payments are read through the v1 endpoints, scoped by location:
//!
//! - `GET v1/{location_id}/payments/{payment_id}`: [`Payment::find`]
//! - `GET v1/{location_id}/payments`: [`Payment::all`] and [`Payment::page`]
//!
//! Listing is newest first, 200 payments per page. [`Payment::all`] returns the
//! first page only; walk further pages with [`Payment::page`] and
//! [`PaymentListParams::batch_token`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::{Money, ResourceError};

/// Page size requested from the list endpoint.
pub const PAYMENTS_PAGE_LIMIT: u32 = 200;

/// A payment taken at a location.
///
/// # Example
///
/// ```rust
/// use square_api::rest::Payment;
///
/// let json = r#"{
///     "id": "P1",
///     "merchant_id": "M1",
///     "created_at": "2024-03-01T10:00:00Z",
///     "inclusive_tax_money": {"currency_code": "USD", "amount": 80},
///     "net_total_money": {"currency_code": "USD", "amount": 1000},
///     "discount_money": {"currency_code": "USD", "amount": 0}
/// }"#;
///
/// let payment: Payment = serde_json::from_str(json).unwrap();
/// assert_eq!(payment.net_total_money.to_string(), "1000 USD");
/// assert!(payment.refund_money.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    /// The payment ID.
    pub id: String,

    /// The merchant that took the payment.
    #[serde(default)]
    pub merchant_id: String,

    /// When the payment was created.
    pub created_at: DateTime<Utc>,

    /// Tax included in the item prices.
    #[serde(default)]
    pub inclusive_tax_money: Money,

    /// Total collected, net of refunds.
    #[serde(default)]
    pub net_total_money: Money,

    /// Total discounts applied.
    #[serde(default)]
    pub discount_money: Money,

    /// Total refunded, if any refund was issued.
    #[serde(
        rename = "refunded_money",
        alias = "refund_money",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub refund_money: Option<Money>,
}

/// Filters for listing payments.
///
/// `begin_time` and `end_time` are only sent when `begin_time` is set; a
/// missing `end_time` then means "now".
///
/// # Example
///
/// ```rust
/// use square_api::rest::PaymentListParams;
/// use chrono::{TimeZone, Utc};
///
/// let params = PaymentListParams::since(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// assert!(params.end_time.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentListParams {
    /// Earliest creation time to include.
    pub begin_time: Option<DateTime<Utc>>,
    /// Latest creation time to include. Ignored without `begin_time`.
    pub end_time: Option<DateTime<Utc>>,
    /// Token from a previous [`PaymentPage`] selecting the following page.
    pub batch_token: Option<String>,
}

impl PaymentListParams {
    /// Payments created from `begin_time` until now.
    #[must_use]
    pub fn since(begin_time: DateTime<Utc>) -> Self {
        Self {
            begin_time: Some(begin_time),
            ..Self::default()
        }
    }

    /// Payments created between `begin_time` and `end_time`.
    #[must_use]
    pub fn between(begin_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            begin_time: Some(begin_time),
            end_time: Some(end_time),
            batch_token: None,
        }
    }

    /// The same filters, selecting the page after `batch_token`.
    #[must_use]
    pub fn with_batch_token(mut self, batch_token: impl Into<String>) -> Self {
        self.batch_token = Some(batch_token.into());
        self
    }

    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("order".to_string(), "DESC".to_string()),
            ("limit".to_string(), PAYMENTS_PAGE_LIMIT.to_string()),
        ];

        if let Some(begin_time) = self.begin_time {
            let end_time = self.end_time.unwrap_or_else(Utc::now);
            query.push(("begin_time".to_string(), format_time(begin_time)));
            query.push(("end_time".to_string(), format_time(end_time)));
        }

        if let Some(batch_token) = &self.batch_token {
            query.push(("batch_token".to_string(), batch_token.clone()));
        }

        query
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One page of payments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPage {
    /// The payments on this page, newest first.
    pub payments: Vec<Payment>,
    /// Token for the next page; `None` on the last page.
    pub next_batch_token: Option<String>,
}

impl PaymentPage {
    /// Returns `true` if another page follows.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_batch_token.is_some()
    }
}

impl Payment {
    /// Resource name used in errors.
    pub const NAME: &'static str = "Payment";

    /// Fetches a single payment.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::FetchFailed`] for any non-200 status
    /// - [`ResourceError::Decode`] if the body is not a payment
    /// - [`ResourceError::Rest`] if no response was received
    pub async fn find(
        client: &RestClient,
        location_id: &str,
        payment_id: &str,
    ) -> Result<Self, ResourceError> {
        let path = format!(
            "v1/{}/payments/{}",
            urlencoding::encode(location_id),
            urlencoding::encode(payment_id)
        );
        let response = client.get(&path, Vec::new()).await?;
        decode(&response)
    }

    /// Lists the first page of payments at a location, newest first.
    ///
    /// At most [`PAYMENTS_PAGE_LIMIT`] payments are returned; use
    /// [`Payment::page`] to continue past them.
    ///
    /// # Errors
    ///
    /// Same as [`Payment::page`].
    pub async fn all(
        client: &RestClient,
        location_id: &str,
        params: &PaymentListParams,
    ) -> Result<Vec<Self>, ResourceError> {
        Ok(Self::page(client, location_id, params).await?.payments)
    }

    /// Fetches one page of payments and the token for the next.
    ///
    /// The next-page token comes from the `Link` header's `batch_token`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::FetchFailed`] for any non-200 status
    /// - [`ResourceError::Decode`] if the body is not a payment list
    /// - [`ResourceError::Rest`] if no response was received
    pub async fn page(
        client: &RestClient,
        location_id: &str,
        params: &PaymentListParams,
    ) -> Result<PaymentPage, ResourceError> {
        let path = format!("v1/{}/payments", urlencoding::encode(location_id));
        let response = client.get(&path, params.to_query()).await?;

        let payments: Vec<Self> = decode(&response)?;
        let next_batch_token = response.pagination().next_batch_token;

        tracing::debug!(
            count = payments.len(),
            has_next_page = next_batch_token.is_some(),
            "Fetched payments"
        );

        Ok(PaymentPage {
            payments,
            next_batch_token,
        })
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ResourceError> {
    if !response.is_ok() {
        return Err(ResourceError::from_http_response(response, Payment::NAME));
    }

    response.json().map_err(|e| ResourceError::Decode {
        resource: Payment::NAME,
        message: e.to_string(),
    })
}
