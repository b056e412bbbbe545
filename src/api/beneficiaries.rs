//! Beneficiaries service.

use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{Beneficiary, BeneficiaryId, CreateBeneficiary};
use crate::Result;

/// Service for payout beneficiary operations.
pub struct BeneficiariesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing beneficiaries.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BeneficiariesQuery {
    /// Filter by entity type (`PERSONAL` or `BUSINESS`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Filter by nickname substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Items per fetched page.
    #[serde(skip_serializing)]
    pub page_size: Option<i32>,
}

impl BeneficiariesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a beneficiary.
    pub async fn create(&self, beneficiary: &CreateBeneficiary) -> Result<Beneficiary> {
        self.inner
            .post("/api/v1/beneficiaries/create", beneficiary)
            .await
    }

    /// Get a beneficiary by id.
    pub async fn get(&self, id: &BeneficiaryId) -> Result<Beneficiary> {
        self.inner
            .get(&format!("/api/v1/beneficiaries/{}", id))
            .await
    }

    /// Delete a beneficiary.
    pub async fn delete(&self, id: &BeneficiaryId) -> Result<()> {
        self.inner
            .delete(&format!("/api/v1/beneficiaries/{}", id))
            .await
    }

    /// Fetch every beneficiary matching the filters, in page order.
    pub async fn list_with_filters(
        &self,
        query: Option<BeneficiariesQuery>,
    ) -> Result<Vec<Beneficiary>> {
        self.list_stream(query).try_collect().await
    }

    /// Stream beneficiaries lazily, one page at a time.
    pub fn list_stream(&self, query: Option<BeneficiariesQuery>) -> PaginatedStream<Beneficiary> {
        let page_size = query
            .as_ref()
            .and_then(|q| q.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        PaginatedStreamBuilder::new(self.inner.clone(), "/api/v1/beneficiaries")
            .page_size(page_size)
            .build_with_query(query)
    }
}
