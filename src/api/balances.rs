//! Wallet balances service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{Balance, BalanceHistoryEntry};
use crate::Result;

/// Service for wallet balance operations.
pub struct BalancesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for the balance history ledger.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BalanceHistoryQuery {
    /// Restrict to one currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Start of the posting-time range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_post_at: Option<DateTime<Utc>>,
    /// End of the posting-time range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_post_at: Option<DateTime<Utc>>,
    /// Items per fetched page.
    #[serde(skip_serializing)]
    pub page_size: Option<i32>,
}

impl BalancesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current per-currency balances.
    pub async fn current(&self) -> Result<Vec<Balance>> {
        self.inner.get("/api/v1/balances/current").await
    }

    /// Fetch the full balance history matching the query, in page order.
    pub async fn history(
        &self,
        query: Option<BalanceHistoryQuery>,
    ) -> Result<Vec<BalanceHistoryEntry>> {
        self.history_stream(query).try_collect().await
    }

    /// Stream the balance history lazily, one page at a time.
    pub fn history_stream(
        &self,
        query: Option<BalanceHistoryQuery>,
    ) -> PaginatedStream<BalanceHistoryEntry> {
        let page_size = query
            .as_ref()
            .and_then(|q| q.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        PaginatedStreamBuilder::new(self.inner.clone(), "/api/v1/balances/history")
            .page_size(page_size)
            .build_with_query(query)
    }
}
