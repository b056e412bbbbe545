//! Payments service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{CreatePayment, Payment, PaymentId, PaymentStatus};
use crate::Result;

/// Service for payment (payout) operations.
///
/// # Example
///
/// ```no_run
/// use airwallex_rs::api::PaymentsQuery;
/// use airwallex_rs::models::PaymentStatus;
///
/// # async fn example(client: airwallex_rs::AirwallexClient) -> airwallex_rs::Result<()> {
/// let query = PaymentsQuery {
///     status: Some(PaymentStatus::Paid),
///     ..Default::default()
/// };
/// let paid = client.payments().list_with_filters(Some(query)).await?;
/// println!("{} paid payments", paid.len());
/// # Ok(())
/// # }
/// ```
pub struct PaymentsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing payments.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PaymentsQuery {
    /// Filter by payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    /// Filter by delivery currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,
    /// Start of the creation-time range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_created_at: Option<DateTime<Utc>>,
    /// End of the creation-time range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_created_at: Option<DateTime<Utc>>,
    /// Items per fetched page.
    #[serde(skip_serializing)]
    pub page_size: Option<i32>,
}

impl PaymentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a payment.
    pub async fn create(&self, payment: &CreatePayment) -> Result<Payment> {
        self.inner.post("/api/v1/payments/create", payment).await
    }

    /// Get a payment by id.
    pub async fn get(&self, id: &PaymentId) -> Result<Payment> {
        self.inner.get(&format!("/api/v1/payments/{}", id)).await
    }

    /// Fetch every payment matching the filters, concatenated in page order.
    ///
    /// Follows pagination until the server reports no more pages. The first
    /// page-fetch failure propagates and partial results are discarded; use
    /// [`list_stream`](Self::list_stream) to consume large result sets
    /// incrementally.
    pub async fn list_with_filters(&self, query: Option<PaymentsQuery>) -> Result<Vec<Payment>> {
        self.list_stream(query).try_collect().await
    }

    /// Stream payments lazily, fetching pages only as they are consumed.
    pub fn list_stream(&self, query: Option<PaymentsQuery>) -> PaginatedStream<Payment> {
        let page_size = query
            .as_ref()
            .and_then(|q| q.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        PaginatedStreamBuilder::new(self.inner.clone(), "/api/v1/payments")
            .page_size(page_size)
            .build_with_query(query)
    }
}
