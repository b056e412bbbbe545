//! Wallet balance models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-currency wallet balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Currency of this balance, ISO 4217.
    pub currency: String,
    /// Funds available for use.
    pub available_amount: Decimal,
    /// Funds pending settlement.
    #[serde(default)]
    pub pending_amount: Option<Decimal>,
    /// Funds reserved against open obligations.
    #[serde(default)]
    pub reserved_amount: Option<Decimal>,
    /// Total balance including pending and reserved funds.
    #[serde(default)]
    pub total_amount: Option<Decimal>,
}

/// One entry of the balance history ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceHistoryEntry {
    /// Currency of the movement.
    pub currency: String,
    /// Signed amount of the movement.
    pub amount: Decimal,
    /// Balance after the movement was applied.
    #[serde(default)]
    pub balance: Option<Decimal>,
    /// Fee deducted as part of the movement, if any.
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Identifier of the transaction that caused the movement.
    #[serde(default)]
    pub source: Option<String>,
    /// Kind of movement (e.g. `CONVERSION`, `PAYOUT`).
    #[serde(default)]
    pub source_type: Option<String>,
    /// When the movement was posted.
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}
