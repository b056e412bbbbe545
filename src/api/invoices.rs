//! Billing invoices service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{Invoice, InvoiceId, InvoiceItem, InvoiceStatus};
use crate::Result;

/// Service for billing invoice operations.
///
/// # Example
///
/// ```no_run
/// use airwallex_rs::api::InvoicesQuery;
/// use airwallex_rs::models::InvoiceStatus;
///
/// # async fn example(client: airwallex_rs::AirwallexClient) -> airwallex_rs::Result<()> {
/// let query = InvoicesQuery {
///     status: Some(InvoiceStatus::Paid),
///     ..Default::default()
/// };
/// for invoice in client.invoices().list_with_filters(Some(query)).await? {
///     println!("{}: {} {}", invoice.id, invoice.total_amount, invoice.currency);
/// }
/// # Ok(())
/// # }
/// ```
pub struct InvoicesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing invoices.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InvoicesQuery {
    /// Filter by invoice status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    /// Filter by customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
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

impl InvoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get an invoice by id.
    pub async fn get(&self, id: &InvoiceId) -> Result<Invoice> {
        self.inner.get(&format!("/api/v1/invoices/{}", id)).await
    }

    /// Fetch every invoice matching the filters, in page order.
    pub async fn list_with_filters(&self, query: Option<InvoicesQuery>) -> Result<Vec<Invoice>> {
        self.list_stream(query).try_collect().await
    }

    /// Stream invoices lazily, one page at a time.
    pub fn list_stream(&self, query: Option<InvoicesQuery>) -> PaginatedStream<Invoice> {
        let page_size = query
            .as_ref()
            .and_then(|q| q.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        PaginatedStreamBuilder::new(self.inner.clone(), "/api/v1/invoices")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// List the line items of an invoice, following pagination to the end.
    pub async fn list_items(&self, id: &InvoiceId) -> Result<Vec<InvoiceItem>> {
        let path = format!("/api/v1/invoices/{}/items", id);
        PaginatedStreamBuilder::<InvoiceItem>::new(self.inner.clone(), path)
            .page_size(DEFAULT_PAGE_SIZE)
            .build_with_query::<()>(None)
            .try_collect()
            .await
    }
}
