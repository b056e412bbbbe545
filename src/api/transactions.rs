//! Financial transactions service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{Transaction, TransactionId};
use crate::Result;

/// Service for the financial transaction ledger.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: airwallex_rs::AirwallexClient) -> airwallex_rs::Result<()> {
/// // Stream transactions lazily; pages are fetched as they are consumed.
/// let mut stream = client.transactions().list_stream(None);
///
/// while let Some(result) = stream.next().await {
///     let txn = result?;
///     println!("{}: {} {}", txn.id, txn.amount, txn.currency);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing financial transactions.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TransactionsQuery {
    /// Filter by settlement state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
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

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a transaction by id.
    pub async fn get(&self, id: &TransactionId) -> Result<Transaction> {
        self.inner
            .get(&format!("/api/v1/financial_transactions/{}", id))
            .await
    }

    /// Fetch every transaction matching the filters, in page order.
    pub async fn list_with_filters(
        &self,
        query: Option<TransactionsQuery>,
    ) -> Result<Vec<Transaction>> {
        self.list_stream(query).try_collect().await
    }

    /// Stream transactions lazily, one page at a time.
    pub fn list_stream(&self, query: Option<TransactionsQuery>) -> PaginatedStream<Transaction> {
        let page_size = query
            .as_ref()
            .and_then(|q| q.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        PaginatedStreamBuilder::new(self.inner.clone(), "/api/v1/financial_transactions")
            .page_size(page_size)
            .build_with_query(query)
    }
}
