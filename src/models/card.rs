//! Issued card models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CardId;

/// Lifecycle status of an issued card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    /// Issued but not yet activated.
    Pending,
    /// Active and usable.
    Active,
    /// Temporarily blocked.
    Inactive,
    /// Permanently closed.
    Closed,
    /// Any status this crate does not model yet.
    #[serde(other)]
    Unknown,
}

/// Per-transaction and aggregate spend limits on a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorizationControls {
    /// Maximum amount of a single authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_transaction_limit: Option<Decimal>,
    /// Currency of the limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_currency: Option<String>,
}

/// An issued card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier.
    pub card_id: CardId,
    /// Cardholder the card was issued to.
    #[serde(default)]
    pub cardholder_id: Option<String>,
    /// Masked card number, last four digits only.
    #[serde(default)]
    pub masked_card_number: Option<String>,
    /// `VIRTUAL` or `PHYSICAL`.
    #[serde(default)]
    pub form_factor: Option<String>,
    /// Current status.
    #[serde(default)]
    pub card_status: Option<CardStatus>,
    /// Spend limits.
    #[serde(default)]
    pub authorization_controls: Option<AuthorizationControls>,
    /// When the card was issued.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for issuing a card.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCard {
    /// Caller-supplied idempotency reference.
    pub request_id: String,
    /// Cardholder to issue the card to.
    pub cardholder_id: String,
    /// `VIRTUAL` or `PHYSICAL`.
    pub form_factor: String,
    /// Spend limits to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_controls: Option<AuthorizationControls>,
}
