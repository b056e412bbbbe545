//! Issued cards service.

use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{Card, CardId, CardStatus, CreateCard};
use crate::Result;

/// Service for issued card operations.
pub struct CardsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing cards.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CardsQuery {
    /// Filter by card status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_status: Option<CardStatus>,
    /// Filter by cardholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_id: Option<String>,
    /// Items per fetched page.
    #[serde(skip_serializing)]
    pub page_size: Option<i32>,
}

impl CardsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Issue a card.
    pub async fn create(&self, card: &CreateCard) -> Result<Card> {
        self.inner.post("/api/v1/issuing/cards/create", card).await
    }

    /// Get a card by id.
    pub async fn get(&self, id: &CardId) -> Result<Card> {
        self.inner
            .get(&format!("/api/v1/issuing/cards/{}", id))
            .await
    }

    /// Activate a pending card.
    pub async fn activate(&self, id: &CardId) -> Result<()> {
        self.inner
            .post_empty(&format!("/api/v1/issuing/cards/{}/activate", id))
            .await
    }

    /// Fetch every card matching the filters, in page order.
    pub async fn list_with_filters(&self, query: Option<CardsQuery>) -> Result<Vec<Card>> {
        self.list_stream(query).try_collect().await
    }

    /// Stream cards lazily, one page at a time.
    pub fn list_stream(&self, query: Option<CardsQuery>) -> PaginatedStream<Card> {
        let page_size = query
            .as_ref()
            .and_then(|q| q.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        PaginatedStreamBuilder::new(self.inner.clone(), "/api/v1/issuing/cards")
            .page_size(page_size)
            .build_with_query(query)
    }
}
