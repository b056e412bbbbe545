//! Account and balance-holder models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AccountId;

/// An Airwallex account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    pub id: AccountId,
    /// Human-readable account name.
    #[serde(default)]
    pub account_name: Option<String>,
    /// Settlement currency of the account.
    #[serde(default)]
    pub account_currency: Option<String>,
    /// Account status (e.g. `ACTIVE`, `SUSPENDED`).
    #[serde(default)]
    pub status: Option<String>,
    /// Country of registration, ISO 3166-1 alpha-2.
    #[serde(default)]
    pub country_code: Option<String>,
    /// When the account was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
