//! Blocking client for the Airwallex API.
//!
//! The blocking client mirrors the async dispatcher's contract — same token
//! lifecycle, same exception mapping, same pagination semantics — with every
//! call occupying the calling thread until the HTTP exchange completes.
//! Request building and response decoding are shared with the async client;
//! only the I/O call differs.
//!
//! Intended for scripts and synchronous applications; do not use it inside
//! an async runtime.
//!
//! # Example
//!
//! ```no_run
//! use airwallex_rs::blocking::BlockingClient;
//! use airwallex_rs::models::Account;
//! use airwallex_rs::{Credentials, Environment};
//!
//! # fn example() -> airwallex_rs::Result<()> {
//! let client = BlockingClient::new(
//!     Credentials::new("your-client-id", "your-api-key"),
//!     Environment::Demo,
//! )?;
//!
//! let accounts: Vec<Account> =
//!     client.list_all("/api/v1/accounts", 100, None::<()>)?;
//! # Ok(())
//! # }
//! ```

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::auth::{parse_expiry, Credentials, LoginResponse, SessionState, LOGIN_PATH};
use crate::client::config::ClientConfig;
use crate::client::decode::{decode_response, ensure_success, resolve_url};
use crate::client::paginated::{Page, PageIter, PageQuery};
use crate::{Environment, Result};

/// Blocking counterpart of [`crate::AirwallexClient`].
///
/// Exposes the dispatcher and pagination contract generically: callers name
/// the endpoint path and the response type. The typed service layer lives on
/// the async client.
pub struct BlockingClient {
    inner: Arc<BlockingInner>,
}

struct BlockingInner {
    http: reqwest::blocking::Client,
    session: Mutex<SessionState>,
    env: Environment,
    base_url: String,
}

impl BlockingClient {
    /// Create a new blocking client for the given environment.
    pub fn new(credentials: Credentials, env: Environment) -> Result<Self> {
        Self::with_config(credentials, env, ClientConfig::default())
    }

    /// Create a new blocking client with custom configuration.
    pub fn with_config(
        credentials: Credentials,
        env: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| env.api_base_url().to_string());

        Ok(Self {
            inner: Arc::new(BlockingInner {
                http,
                session: Mutex::new(SessionState::new(credentials)),
                env,
                base_url,
            }),
        })
    }

    /// Exchange credentials for a token now instead of on first request.
    pub fn authenticate(&self) -> Result<()> {
        let mut state = self.inner.lock_session();
        self.inner.login(&mut state)
    }

    /// Get the current environment.
    pub fn environment(&self) -> Environment {
        self.inner.env
    }

    /// Perform a request and decode the JSON response.
    pub fn request<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.inner.request(method, path, query, body)
    }

    /// Make a GET request.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.inner
            .request(Method::GET, path, None::<&()>, None::<&()>)
    }

    /// Make a GET request with query parameters.
    pub fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.inner
            .request(Method::GET, path, Some(query), None::<&()>)
    }

    /// Make a POST request.
    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.inner
            .request(Method::POST, path, None::<&()>, Some(body))
    }

    /// Make a DELETE request, ignoring the response body.
    pub fn delete(&self, path: &str) -> Result<()> {
        let (status, bytes, url) = self
            .inner
            .dispatch::<(), ()>(Method::DELETE, path, None, None)?;
        ensure_success(status, &bytes, "DELETE", &url)
    }

    /// Iterate lazily over a paginated list endpoint.
    ///
    /// Pages are fetched strictly at page boundaries; stopping early never
    /// fetches a page the consumer does not reach.
    pub fn pages<T, Q>(&self, path: &str, page_size: i32, filters: Option<Q>) -> PageIter<T>
    where
        T: DeserializeOwned + 'static,
        Q: Serialize + Clone + 'static,
    {
        let inner = self.inner.clone();
        let path = path.to_string();
        PageIter::new(move |page_num| {
            let page_query = PageQuery {
                page_num,
                page_size,
                extra: filters.clone(),
            };
            inner.request::<Page<T>, _, ()>(Method::GET, &path, Some(&page_query), None)
        })
    }

    /// Eagerly fetch every page of a list endpoint, concatenated in page
    /// order. The first page-fetch failure propagates; partial results are
    /// discarded.
    pub fn list_all<T, Q>(&self, path: &str, page_size: i32, filters: Option<Q>) -> Result<Vec<T>>
    where
        T: DeserializeOwned + 'static,
        Q: Serialize + Clone + 'static,
    {
        self.pages(path, page_size, filters).collect()
    }
}

impl BlockingInner {
    fn lock_session(&self) -> MutexGuard<'_, SessionState> {
        // Recover rather than panic if a prior holder panicked.
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Login with the session lock held; see the async twin for semantics.
    fn login(&self, state: &mut SessionState) -> Result<()> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        tracing::debug!(url = %url, "exchanging credentials for bearer token");

        let response = self
            .http
            .post(&url)
            .header("x-client-id", state.credentials().client_id())
            .header("x-api-key", state.credentials().api_key().expose_secret())
            .send()?;

        let status = response.status().as_u16();
        let bytes = response.bytes()?.to_vec();

        let login: LoginResponse = decode_response(status, &bytes, "POST", &url)?;
        let expires_at = parse_expiry(&login.expires_at)?;
        state.store(login.token, expires_at);
        Ok(())
    }

    fn ensure_valid(&self) -> Result<String> {
        let mut state = self.lock_session();
        if state.needs_refresh(Utc::now()) {
            self.login(&mut state)?;
        }
        Ok(state.bearer().expect("token present after refresh"))
    }

    fn dispatch<Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<(u16, Vec<u8>, String)> {
        let url = resolve_url(&self.base_url, path);
        let bearer = self.ensure_valid()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer)
                .map_err(|_| crate::Error::InvalidInput("invalid token format".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, url = %url, "dispatching request");
        let response = request.send()?;
        let status = response.status().as_u16();
        let bytes = response.bytes()?.to_vec();
        Ok((status, bytes, url))
    }

    fn request<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let name = method.as_str().to_string();
        let (status, bytes, url) = self.dispatch(method, path, query, body)?;
        decode_response(status, &bytes, &name, &url)
    }
}

impl Clone for BlockingClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("env", &self.inner.env)
            .finish()
    }
}
