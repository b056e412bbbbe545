//! FX conversions service.

use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{Conversion, ConversionId, CreateConversion};
use crate::Result;

/// Service for FX conversion operations.
pub struct FxService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing conversions.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConversionsQuery {
    /// Filter by conversion status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by bought currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_currency: Option<String>,
    /// Filter by sold currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_currency: Option<String>,
    /// Items per fetched page.
    #[serde(skip_serializing)]
    pub page_size: Option<i32>,
}

impl FxService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a conversion between two wallet currencies.
    pub async fn create(&self, conversion: &CreateConversion) -> Result<Conversion> {
        self.inner
            .post("/api/v1/fx/conversions/create", conversion)
            .await
    }

    /// Get a conversion by id.
    pub async fn get(&self, id: &ConversionId) -> Result<Conversion> {
        self.inner
            .get(&format!("/api/v1/fx/conversions/{}", id))
            .await
    }

    /// Fetch every conversion matching the filters, in page order.
    pub async fn list_with_filters(
        &self,
        query: Option<ConversionsQuery>,
    ) -> Result<Vec<Conversion>> {
        self.list_stream(query).try_collect().await
    }

    /// Stream conversions lazily, one page at a time.
    pub fn list_stream(&self, query: Option<ConversionsQuery>) -> PaginatedStream<Conversion> {
        let page_size = query
            .as_ref()
            .and_then(|q| q.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        PaginatedStreamBuilder::new(self.inner.clone(), "/api/v1/fx/conversions")
            .page_size(page_size)
            .build_with_query(query)
    }
}
