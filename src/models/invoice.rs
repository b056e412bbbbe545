//! Billing invoice models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InvoiceId;

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Issued, payment not yet collected.
    Open,
    /// Fully paid.
    Paid,
    /// Collection failed.
    PaymentFailed,
    /// Voided before collection.
    Void,
    /// Any status this crate does not model yet.
    #[serde(other)]
    Unknown,
}

/// A billing invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice identifier.
    pub id: InvoiceId,
    /// Customer the invoice was issued to.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Invoice currency, ISO 4217.
    pub currency: String,
    /// Total amount due.
    pub total_amount: Decimal,
    /// Current status.
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    /// Start of the billing period.
    #[serde(default)]
    pub period_start_at: Option<DateTime<Utc>>,
    /// End of the billing period.
    #[serde(default)]
    pub period_end_at: Option<DateTime<Utc>>,
    /// When the invoice was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A line item on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Item identifier.
    pub id: String,
    /// Invoice this item belongs to.
    #[serde(default)]
    pub invoice_id: Option<InvoiceId>,
    /// Item amount.
    pub amount: Decimal,
    /// Item currency, ISO 4217.
    pub currency: String,
    /// Description of the charge.
    #[serde(default)]
    pub description: Option<String>,
    /// Units billed.
    #[serde(default)]
    pub quantity: Option<u32>,
}
