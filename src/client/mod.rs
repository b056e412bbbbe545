//! HTTP client and dispatch layer for the Airwallex API.
//!
//! This module provides the main entry point [`AirwallexClient`] for
//! interacting with the Airwallex API, together with the pagination engine
//! and, under the `blocking` feature, a synchronous client.
//!
//! # Example
//!
//! ```no_run
//! use airwallex_rs::{AirwallexClient, Credentials, Environment};
//!
//! # async fn example() -> airwallex_rs::Result<()> {
//! let client = AirwallexClient::new(
//!     Credentials::new("client-id", "api-key"),
//!     Environment::Demo,
//! )?;
//!
//! let accounts = client.accounts().list().await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
mod config;
pub(crate) mod decode;
mod http;
pub mod paginated;

pub use config::ClientConfig;
pub use http::AirwallexClient;
pub use paginated::{Page, PaginatedStream, DEFAULT_PAGE_SIZE};
pub(crate) use http::ClientInner;

#[cfg(feature = "blocking")]
pub use paginated::PageIter;
