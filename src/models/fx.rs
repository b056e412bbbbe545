//! FX conversion models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ConversionId;

/// An FX conversion between two wallet currencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// Conversion identifier.
    pub id: ConversionId,
    /// Caller-supplied idempotency reference.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Currency sold.
    pub sell_currency: String,
    /// Amount sold.
    #[serde(default)]
    pub sell_amount: Option<Decimal>,
    /// Currency bought.
    pub buy_currency: String,
    /// Amount bought.
    #[serde(default)]
    pub buy_amount: Option<Decimal>,
    /// Executed all-in rate.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Conversion status (e.g. `AWAITING_FUNDS`, `SETTLED`).
    #[serde(default)]
    pub status: Option<String>,
    /// Date the conversion settles, `YYYY-MM-DD`.
    #[serde(default)]
    pub settlement_date: Option<String>,
    /// When the conversion was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a conversion.
///
/// Exactly one of `sell_amount` and `buy_amount` should be set; the server
/// derives the other side from the executed rate.
#[derive(Debug, Clone, Serialize)]
pub struct CreateConversion {
    /// Caller-supplied idempotency reference.
    pub request_id: String,
    /// Currency to sell.
    pub sell_currency: String,
    /// Currency to buy.
    pub buy_currency: String,
    /// Amount to sell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_amount: Option<Decimal>,
    /// Amount to buy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_amount: Option<Decimal>,
    /// Settle as soon as funds allow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_agreement: Option<bool>,
}
