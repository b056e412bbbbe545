//! Authentication for the Airwallex API.
//!
//! Airwallex uses a single credential exchange: a `POST` to the login
//! endpoint carrying `x-client-id` and `x-api-key` headers returns a
//! short-lived bearer token together with its expiry instant. The
//! [`Session`] caches that token per client instance and refreshes it
//! lazily — on first use, and again whenever the cached token has expired.
//!
//! ```no_run
//! use airwallex_rs::{AirwallexClient, Credentials, Environment};
//!
//! # async fn example() -> airwallex_rs::Result<()> {
//! let client = AirwallexClient::new(
//!     Credentials::new("your-client-id", "your-api-key"),
//!     Environment::Demo,
//! )?;
//! // The first request performs the login transparently.
//! let accounts = client.accounts().list().await?;
//! # Ok(())
//! # }
//! ```

mod session;

pub use session::{Credentials, Session};

pub(crate) use session::{parse_expiry, LoginResponse, SessionState, LOGIN_PATH};
