//! Session management for Airwallex API authentication.

use chrono::{DateTime, NaiveDateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::decode::decode_response;
use crate::{Error, Result};

/// Path of the credential-exchange endpoint.
pub(crate) const LOGIN_PATH: &str = "/api/v1/authentication/login";

/// Static API credentials supplied once at client construction.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    api_key: SecretString,
}

impl Credentials {
    /// Create credentials from a client id and API key.
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// The client id, sent as the `x-client-id` header.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// A bearer token and its expiry instant.
pub(crate) struct BearerToken {
    value: SecretString,
    expires_at: DateTime<Utc>,
}

/// Token-cache state shared by the async and blocking sessions.
///
/// Holds the refresh decision and the cached token; performs no I/O, so both
/// execution modes drive it with their own transport.
pub(crate) struct SessionState {
    credentials: Credentials,
    token: Option<BearerToken>,
}

impl SessionState {
    pub(crate) fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token: None,
        }
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// A refresh is needed when no token is cached or `now` is at or past
    /// the cached token's expiry.
    pub(crate) fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        match &self.token {
            None => true,
            Some(token) => now >= token.expires_at,
        }
    }

    /// Replace the cached token.
    pub(crate) fn store(&mut self, value: String, expires_at: DateTime<Utc>) {
        self.token = Some(BearerToken {
            value: SecretString::from(value),
            expires_at,
        });
    }

    /// The `Authorization` header value for the cached token.
    pub(crate) fn bearer(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|t| format!("Bearer {}", t.value.expose_secret()))
    }

    pub(crate) fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.token.as_ref().map(|t| t.expires_at)
    }
}

/// Wire shape of a successful login response.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub(crate) token: String,
    pub(crate) expires_at: String,
}

/// Parse the `expires_at` instant from a login response.
///
/// The API emits ISO-8601; offsets appear both with and without a colon, and
/// some environments emit naive timestamps, which are read as UTC.
pub(crate) fn parse_expiry(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    Err(Error::InvalidInput(format!(
        "unparseable expires_at instant: {raw}"
    )))
}

/// Authentication session for the Airwallex API.
///
/// The session owns the bearer token for one client instance and refreshes
/// it lazily: on first use, and again whenever the cached token has expired.
///
/// # Thread Safety
///
/// `Session` is shared across tasks. The whole "check expiry, refresh, read"
/// sequence runs under one lock, so concurrent callers that race on an
/// expired token still produce a single login call.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Mutex<SessionState>>,
}

impl Session {
    /// Create a session from credentials. No I/O happens until first use.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState::new(credentials))),
        }
    }

    /// Ensure a non-expired token is cached, logging in if needed, and
    /// return the `Authorization` header value.
    pub(crate) async fn ensure_valid(
        &self,
        http: &reqwest::Client,
        base_url: &str,
    ) -> Result<String> {
        let mut state = self.inner.lock().await;
        if state.needs_refresh(Utc::now()) {
            login(http, base_url, &mut state).await?;
        }
        // A token was just stored or was still valid.
        Ok(state.bearer().expect("token present after refresh"))
    }

    /// Exchange credentials for a fresh token, replacing any cached one.
    ///
    /// Called automatically by the dispatcher; exposed for callers that want
    /// to fail fast at startup.
    pub async fn authenticate(&self, http: &reqwest::Client, base_url: &str) -> Result<()> {
        let mut state = self.inner.lock().await;
        login(http, base_url, &mut state).await
    }

    /// Check if the cached token is absent or expired.
    pub async fn is_expired(&self) -> bool {
        self.inner.lock().await.needs_refresh(Utc::now())
    }

    /// Expiry instant of the cached token, if one is cached.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().await.expires_at()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Perform the credential exchange and store the resulting token.
///
/// Runs with the session lock held so a racing caller observes either the
/// old valid token or the new one, never a half-refreshed state.
async fn login(
    http: &reqwest::Client,
    base_url: &str,
    state: &mut SessionState,
) -> Result<()> {
    let url = format!("{}{}", base_url, LOGIN_PATH);
    tracing::debug!(url = %url, "exchanging credentials for bearer token");

    let response = http
        .post(&url)
        .header("x-client-id", state.credentials().client_id())
        .header("x-api-key", state.credentials().api_key().expose_secret())
        .send()
        .await?;

    let status = response.status().as_u16();
    let bytes = response.bytes().await?;

    let login: LoginResponse = match decode_response(status, &bytes, "POST", &url) {
        Ok(login) => login,
        Err(err) => {
            tracing::warn!(status, "authentication failed");
            return Err(err);
        }
    };
    let expires_at = parse_expiry(&login.expires_at)?;
    state.store(login.token, expires_at);
    tracing::debug!(%expires_at, "bearer token refreshed");
    Ok(())
}
