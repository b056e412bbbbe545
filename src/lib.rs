//! # airwallex-rs
//!
//! A production-grade Rust client for the Airwallex platform API.
//!
//! This crate provides typed access to Airwallex's payments platform:
//! accounts, wallet balances, payments, beneficiaries, invoices, issued
//! cards, financial transactions and FX conversions.
//!
//! ## Features
//!
//! - **Authentication**: transparent bearer-token lifecycle — the client
//!   exchanges its credentials on first use and re-authenticates only when
//!   the cached token has expired, never more than once per refresh even
//!   under concurrent use
//! - **Typed errors**: every non-2xx response maps to an [`ApiError`] with
//!   a stable classification ([`ApiErrorKind`]) driven by the API's error
//!   codes; transport failures stay distinct
//! - **Pagination**: every list endpoint is available eagerly
//!   (`list_with_filters`) and as a lazy `Stream` that fetches pages only as
//!   they are consumed
//! - **Two execution modes**: async-first on Tokio, plus a [`blocking`]
//!   client behind the `blocking` feature (enabled by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use airwallex_rs::{AirwallexClient, Credentials, Environment};
//!
//! #[tokio::main]
//! async fn main() -> airwallex_rs::Result<()> {
//!     let client = AirwallexClient::new(
//!         Credentials::new(
//!             std::env::var("AIRWALLEX_CLIENT_ID").unwrap(),
//!             std::env::var("AIRWALLEX_API_KEY").unwrap(),
//!         ),
//!         Environment::Demo,
//!     )?;
//!
//!     // List accounts; the first call logs in transparently.
//!     let accounts = client.accounts().list().await?;
//!     println!("Found {} accounts", accounts.len());
//!
//!     // Current wallet balances
//!     for balance in client.balances().current().await? {
//!         println!("{}: {}", balance.currency, balance.available_amount);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Lazy pagination
//!
//! ```rust,no_run
//! use airwallex_rs::{AirwallexClient, Credentials, Environment};
//! use futures_util::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> airwallex_rs::Result<()> {
//!     let client = AirwallexClient::new(
//!         Credentials::new("id", "key"),
//!         Environment::Demo,
//!     )?;
//!
//!     // Pages are fetched one at a time as the stream is consumed;
//!     // stopping early never fetches an unconsumed page.
//!     let mut stream = client.transactions().list_stream(None);
//!     while let Some(txn) = stream.next().await {
//!         let txn = txn?;
//!         println!("{}: {} {}", txn.id, txn.amount, txn.currency);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! ```rust,no_run
//! use airwallex_rs::{ApiErrorKind, Error};
//!
//! # async fn example(client: airwallex_rs::AirwallexClient) {
//! match client.accounts().list().await {
//!     Ok(accounts) => println!("{} accounts", accounts.len()),
//!     Err(Error::Api(e)) if e.kind == ApiErrorKind::RateLimit => {
//!         eprintln!("throttled: {e}");
//!     }
//!     Err(Error::Http(e)) => eprintln!("transport failure: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session};
pub use client::{AirwallexClient, ClientConfig, Page, PaginatedStream, DEFAULT_PAGE_SIZE};
pub use error::{ApiError, ApiErrorKind, Error, Result};
pub use models::{
    AccountId, BeneficiaryId, CardId, ConversionId, Environment, InvoiceId, PaymentId,
    TransactionId,
};

#[cfg(feature = "blocking")]
pub use client::blocking;

/// Prelude module for convenient imports.
///
/// ```rust
/// use airwallex_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BalanceHistoryQuery, BeneficiariesQuery, CardsQuery, ConversionsQuery, InvoicesQuery,
        PaymentsQuery, TransactionsQuery,
    };
    pub use crate::auth::{Credentials, Session};
    pub use crate::client::{AirwallexClient, ClientConfig, Page, PaginatedStream};
    pub use crate::error::{ApiError, ApiErrorKind, Error, Result};
    pub use crate::models::{
        Account, AccountId, Balance, BalanceHistoryEntry, Beneficiary, BeneficiaryId, Card,
        CardId, CardStatus, Conversion, ConversionId, CreateBeneficiary, CreateCard,
        CreateConversion, CreatePayment, Environment, Invoice, InvoiceId, InvoiceItem,
        InvoiceStatus, Payment, PaymentId, PaymentStatus, Transaction, TransactionId,
    };
}
