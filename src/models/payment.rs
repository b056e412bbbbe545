//! Payment (payout) models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BeneficiaryId, PaymentId};

/// Lifecycle status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Accepted, not yet dispatched to the payment rail.
    New,
    /// Dispatched and awaiting confirmation.
    InProcessing,
    /// Settled with the beneficiary's institution.
    Paid,
    /// Terminally failed.
    Failed,
    /// Cancelled before dispatch.
    Cancelled,
    /// Any status this crate does not model yet.
    #[serde(other)]
    Unknown,
}

/// A payment returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Payment identifier.
    pub id: PaymentId,
    /// Caller-supplied idempotency reference.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Amount to deliver to the beneficiary.
    pub payment_amount: Decimal,
    /// Currency delivered to the beneficiary.
    pub payment_currency: String,
    /// Currency the wallet is debited in.
    #[serde(default)]
    pub source_currency: Option<String>,
    /// Beneficiary receiving the funds.
    #[serde(default)]
    pub beneficiary_id: Option<BeneficiaryId>,
    /// Current status.
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    /// Payment rail (e.g. `SWIFT`, `LOCAL`).
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Free-text reference shown to the beneficiary.
    #[serde(default)]
    pub reference: Option<String>,
    /// When the payment was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the payment was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a payment.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayment {
    /// Caller-supplied idempotency reference.
    pub request_id: String,
    /// Amount to deliver.
    pub payment_amount: Decimal,
    /// Currency to deliver.
    pub payment_currency: String,
    /// Beneficiary to pay.
    pub beneficiary_id: BeneficiaryId,
    /// Payment rail; server picks a default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Date the transfer should execute, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    /// Free-text reference shown to the beneficiary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
