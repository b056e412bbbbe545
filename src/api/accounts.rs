//! Accounts service.

use std::sync::Arc;

use futures_util::TryStreamExt;

use crate::client::paginated::{PaginatedStreamBuilder, DEFAULT_PAGE_SIZE};
use crate::client::ClientInner;
use crate::models::{Account, AccountId};
use crate::Result;

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: airwallex_rs::AirwallexClient) -> airwallex_rs::Result<()> {
/// let accounts = client.accounts().list().await?;
/// for account in accounts {
///     println!("{}: {:?}", account.id, account.account_currency);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all accounts, following pagination to the end.
    pub async fn list(&self) -> Result<Vec<Account>> {
        PaginatedStreamBuilder::<Account>::new(self.inner.clone(), "/api/v1/accounts")
            .page_size(DEFAULT_PAGE_SIZE)
            .build_with_query::<()>(None)
            .try_collect()
            .await
    }

    /// Get details for a specific account.
    pub async fn get(&self, id: &AccountId) -> Result<Account> {
        self.inner.get(&format!("/api/v1/accounts/{}", id)).await
    }
}
