//! Financial transaction models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TransactionId;

/// A financial transaction on the wallet ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier.
    pub id: TransactionId,
    /// Signed amount of the movement.
    pub amount: Decimal,
    /// Currency of the movement, ISO 4217.
    pub currency: String,
    /// Net amount after fees.
    #[serde(default)]
    pub net: Option<Decimal>,
    /// Fee charged for the movement.
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Kind of movement (e.g. `PAYOUT`, `CONVERSION`, `DEPOSIT`).
    #[serde(default)]
    pub transaction_type: Option<String>,
    /// Settlement state (e.g. `SETTLED`, `PENDING`).
    #[serde(default)]
    pub status: Option<String>,
    /// Identifier of the object that caused the movement.
    #[serde(default)]
    pub source_id: Option<String>,
    /// When the transaction was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
