//! HTTP client implementation for the Airwallex API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::api::{
    AccountsService, BalancesService, BeneficiariesService, CardsService, FxService,
    InvoicesService, PaymentsService, TransactionsService,
};
use crate::auth::{Credentials, Session};
use crate::{Environment, Result};

use super::config::ClientConfig;
use super::decode::{decode_response, ensure_success, resolve_url};

/// The main client for interacting with the Airwallex API.
///
/// This client provides access to all API services through method calls
/// that return service structs. The client manages authentication,
/// request building, and response parsing: before every dispatch it
/// guarantees a non-expired bearer token, logging in exactly once when the
/// cached token is absent or expired. Requests are single-attempt — there is
/// no retry or backoff layer.
///
/// # Example
///
/// ```no_run
/// use airwallex_rs::{AirwallexClient, Credentials, Environment};
///
/// # async fn example() -> airwallex_rs::Result<()> {
/// let client = AirwallexClient::new(
///     Credentials::new("your-client-id", "your-api-key"),
///     Environment::Demo,
/// )?;
///
/// // Use the accounts service
/// let accounts = client.accounts().list().await?;
///
/// // Use the payments service
/// let payments = client.payments().list_with_filters(None).await?;
/// # Ok(())
/// # }
/// ```
pub struct AirwallexClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
    pub(crate) env: Environment,
    pub(crate) base_url: String,
}

impl AirwallexClient {
    /// Create a new client for the given environment.
    ///
    /// No network I/O happens here; the first request performs the login.
    pub fn new(credentials: Credentials, env: Environment) -> Result<Self> {
        Self::with_config(credentials, env, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(
        credentials: Credentials,
        env: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| env.api_base_url().to_string());

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session: Session::new(credentials),
                config,
                env,
                base_url,
            }),
        })
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the wallet balances service.
    pub fn balances(&self) -> BalancesService {
        BalancesService::new(self.inner.clone())
    }

    /// Get the payments service.
    pub fn payments(&self) -> PaymentsService {
        PaymentsService::new(self.inner.clone())
    }

    /// Get the beneficiaries service.
    pub fn beneficiaries(&self) -> BeneficiariesService {
        BeneficiariesService::new(self.inner.clone())
    }

    /// Get the invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the issued cards service.
    pub fn cards(&self) -> CardsService {
        CardsService::new(self.inner.clone())
    }

    /// Get the financial transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the FX conversions service.
    pub fn fx(&self) -> FxService {
        FxService::new(self.inner.clone())
    }

    /// Exchange credentials for a token now instead of on first request.
    ///
    /// Useful for failing fast at startup with bad credentials.
    pub async fn authenticate(&self) -> Result<()> {
        self.inner
            .session
            .authenticate(&self.inner.http, &self.inner.base_url)
            .await
    }

    /// Get the current environment.
    pub fn environment(&self) -> Environment {
        self.inner.env
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}

impl ClientInner {
    /// Dispatch one request and return the raw outcome.
    ///
    /// The single path every typed wrapper funnels through: token check and
    /// refresh, header merge (the dispatcher always sets `Authorization`
    /// itself), then a single attempt over the wire. Transport failures
    /// surface as [`crate::Error::Http`].
    async fn dispatch<Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<(u16, Vec<u8>, String)> {
        let url = resolve_url(&self.base_url, path);
        let bearer = self.session.ensure_valid(&self.http, &self.base_url).await?;

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
        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?.to_vec();
        Ok((status, bytes, url))
    }

    /// Perform a request and decode the JSON response.
    pub(crate) async fn request<T, Q, B>(
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
        let (status, bytes, url) = self.dispatch(method, path, query, body).await?;
        decode_response(status, &bytes, &name, &url)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>, None::<&()>)
            .await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.request(Method::GET, path, Some(query), None::<&()>)
            .await
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, None::<&()>, Some(body))
            .await
    }

    /// Make a POST request with an empty body, ignoring the response body.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        let (status, bytes, url) = self
            .dispatch::<(), ()>(Method::POST, path, None, None)
            .await?;
        ensure_success(status, &bytes, "POST", &url)
    }

    /// Make a DELETE request, ignoring the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let (status, bytes, url) = self
            .dispatch::<(), ()>(Method::DELETE, path, None, None)
            .await?;
        ensure_success(status, &bytes, "DELETE", &url)
    }
}

impl Clone for AirwallexClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for AirwallexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirwallexClient")
            .field("env", &self.inner.env)
            .field("config", &self.inner.config)
            .finish()
    }
}
