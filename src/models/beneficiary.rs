//! Beneficiary models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BeneficiaryId;

/// Bank account details of a beneficiary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDetails {
    /// Name on the account.
    #[serde(default)]
    pub account_name: Option<String>,
    /// Account number or IBAN.
    #[serde(default)]
    pub account_number: Option<String>,
    /// SWIFT/BIC code.
    #[serde(default)]
    pub swift_code: Option<String>,
    /// Local clearing code (routing number, sort code, BSB).
    #[serde(default)]
    pub local_clearing_system: Option<String>,
    /// Country of the receiving bank, ISO 3166-1 alpha-2.
    #[serde(default)]
    pub bank_country_code: Option<String>,
}

/// A payout beneficiary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Beneficiary identifier.
    pub id: BeneficiaryId,
    /// Display name.
    #[serde(default)]
    pub nickname: Option<String>,
    /// `PERSONAL` or `BUSINESS`.
    #[serde(default)]
    pub entity_type: Option<String>,
    /// Receiving bank account.
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    /// Transfer methods valid for this beneficiary.
    #[serde(default)]
    pub payment_methods: Vec<String>,
    /// When the beneficiary was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a beneficiary.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBeneficiary {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// `PERSONAL` or `BUSINESS`.
    pub entity_type: String,
    /// Receiving bank account.
    pub bank_details: BankDetails,
    /// Transfer methods to enable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_methods: Vec<String>,
}
