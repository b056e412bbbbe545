//! Primitive types and newtypes for type-safe API interactions.
//!
//! Airwallex identifiers are plain strings on the wire; wrapping them in
//! newtypes prevents passing a payment id where a beneficiary id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_type! {
    /// A strongly-typed Airwallex account identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use airwallex_rs::AccountId;
    ///
    /// let account = AccountId::new("acct_1234");
    /// assert_eq!(account.as_str(), "acct_1234");
    /// ```
    AccountId
}

id_type! {
    /// A strongly-typed payment identifier.
    PaymentId
}

id_type! {
    /// A strongly-typed beneficiary identifier.
    BeneficiaryId
}

id_type! {
    /// A strongly-typed invoice identifier.
    InvoiceId
}

id_type! {
    /// A strongly-typed issued-card identifier.
    CardId
}

id_type! {
    /// A strongly-typed financial transaction identifier.
    TransactionId
}

id_type! {
    /// A strongly-typed FX conversion identifier.
    ConversionId
}

/// Environment configuration for the Airwallex API.
///
/// Determines which API endpoints to use - production or demo.
///
/// # Example
///
/// ```
/// use airwallex_rs::Environment;
///
/// let env = Environment::Demo;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment - live money movement.
    #[default]
    Production,
    /// Demo environment for integration testing.
    Demo,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.airwallex.com",
            Environment::Demo => "https://api-demo.airwallex.com",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the demo environment.
    pub fn is_demo(&self) -> bool {
        matches!(self, Environment::Demo)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Demo => write!(f, "demo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id() {
        let account = AccountId::new("acct_1234");
        assert_eq!(account.as_str(), "acct_1234");
        assert_eq!(account.to_string(), "acct_1234");
    }

    #[test]
    fn test_payment_id_from_str() {
        let payment: PaymentId = "pay_abc".into();
        assert_eq!(payment.as_str(), "pay_abc");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: InvoiceId = serde_json::from_str("\"inv_test123\"").unwrap();
        assert_eq!(id.as_str(), "inv_test123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"inv_test123\"");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://api.airwallex.com"
        );
        assert_eq!(
            Environment::Demo.api_base_url(),
            "https://api-demo.airwallex.com"
        );
    }
}
