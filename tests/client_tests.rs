//! Integration tests for airwallex-rs against an in-process mock API.
//!
//! The mock implements the credential-exchange endpoint and a handful of
//! resource endpoints, counting logins and page fetches so the tests can
//! assert on the token lifecycle and pagination behavior exactly.
//!
//! Run with: cargo test --test client_tests

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use futures_util::StreamExt;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use airwallex_rs::prelude::*;

const CLIENT_ID: &str = "test_client_id";
const API_KEY: &str = "test_api_key";

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Shared state of the mock API.
#[derive(Clone)]
struct MockState {
    /// Seconds of validity granted to each issued token.
    token_ttl_secs: i64,
    /// Number of credential exchanges performed.
    logins: Arc<AtomicUsize>,
    /// Number of list-page fetches performed.
    page_fetches: Arc<AtomicUsize>,
    /// The most recently issued token.
    current_token: Arc<Mutex<Option<String>>>,
}

impl MockState {
    fn new(token_ttl_secs: i64) -> Self {
        Self {
            token_ttl_secs,
            logins: Arc::new(AtomicUsize::new(0)),
            page_fetches: Arc::new(AtomicUsize::new(0)),
            current_token: Arc::new(Mutex::new(None)),
        }
    }

    fn login_count(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    fn fetch_count(&self) -> usize {
        self.page_fetches.load(Ordering::SeqCst)
    }

    /// Reject requests that do not carry the current bearer token.
    fn check_bearer(&self, headers: &HeaderMap) -> std::result::Result<(), Response> {
        let expected = self
            .current_token
            .lock()
            .unwrap()
            .as_ref()
            .map(|t| format!("Bearer {t}"));
        let provided = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        if expected.is_some() && provided == expected {
            Ok(())
        } else {
            Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "code": "token_expired", "message": "Token invalid" })),
            )
                .into_response())
        }
    }
}

async fn login_handler(State(state): State<MockState>, headers: HeaderMap) -> Response {
    let client_id = headers.get("x-client-id").and_then(|v| v.to_str().ok());
    let api_key = headers.get("x-api-key").and_then(|v| v.to_str().ok());

    if client_id != Some(CLIENT_ID) || api_key != Some(API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "code": "credentials_invalid",
                "message": "Invalid credentials",
                "source": "api_key"
            })),
        )
            .into_response();
    }

    let n = state.logins.fetch_add(1, Ordering::SeqCst);
    let token = format!("tok-{n}");
    *state.current_token.lock().unwrap() = Some(token.clone());

    let expires_at = (Utc::now() + Duration::seconds(state.token_ttl_secs)).to_rfc3339();
    (
        StatusCode::CREATED,
        Json(json!({ "token": token, "expires_at": expires_at })),
    )
        .into_response()
}

async fn list_accounts_handler(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if let Err(resp) = state.check_bearer(&headers) {
        return resp;
    }
    Json(json!({
        "items": [
            { "id": "acct_1", "account_currency": "USD", "status": "ACTIVE" }
        ],
        "has_more": false
    }))
    .into_response()
}

async fn get_account_handler(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = state.check_bearer(&headers) {
        return resp;
    }
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": "not_found", "message": "Account not found" })),
        )
            .into_response();
    }
    Json(json!({ "id": id, "account_currency": "USD" })).into_response()
}

/// Five payments, sliced into pages by the requested page size.
async fn list_payments_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = state.check_bearer(&headers) {
        return resp;
    }
    state.page_fetches.fetch_add(1, Ordering::SeqCst);

    let page_num: usize = params
        .get("page_num")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let page_size: usize = params
        .get("page_size")
        .and_then(|v| v.parse().ok())
        .unwrap_or(100);

    const TOTAL: usize = 5;
    let start = (page_num * page_size).min(TOTAL);
    let end = (start + page_size).min(TOTAL);
    let items: Vec<_> = (start..end)
        .map(|i| {
            json!({
                "id": format!("pay_{i}"),
                "payment_amount": 100 + i,
                "payment_currency": "USD",
                "status": "PAID"
            })
        })
        .collect();

    Json(json!({ "items": items, "has_more": end < TOTAL })).into_response()
}

async fn create_beneficiary_handler(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    if let Err(resp) = state.check_bearer(&headers) {
        return resp;
    }
    if body.get("nickname").and_then(|v| v.as_str()) == Some("dup") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": "already_exists",
                "message": "Resource already exists",
                "source": "nickname"
            })),
        )
            .into_response();
    }
    Json(json!({ "id": "ben_1", "nickname": body.get("nickname"), "entity_type": "PERSONAL" }))
        .into_response()
}

async fn current_balances_handler(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if let Err(resp) = state.check_bearer(&headers) {
        return resp;
    }
    // Deliberately not JSON: exercises the decode-failure path.
    (StatusCode::OK, "plain text, not json").into_response()
}

fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/v1/authentication/login", post(login_handler))
        .route("/api/v1/accounts", get(list_accounts_handler))
        .route("/api/v1/accounts/{id}", get(get_account_handler))
        .route("/api/v1/payments", get(list_payments_handler))
        .route(
            "/api/v1/beneficiaries/create",
            post(create_beneficiary_handler),
        )
        .route("/api/v1/balances/current", get(current_balances_handler))
        .with_state(state)
}

/// Serve the mock API on an ephemeral port.
async fn spawn_server(token_ttl_secs: i64) -> (SocketAddr, MockState) {
    init_logging();
    let state = MockState::new(token_ttl_secs);
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

fn test_client(addr: SocketAddr) -> AirwallexClient {
    AirwallexClient::with_config(
        Credentials::new(CLIENT_ID, API_KEY),
        Environment::Demo,
        ClientConfig::new().with_base_url(format!("http://{addr}")),
    )
    .expect("client should build")
}

// ============================================================================
// TOKEN LIFECYCLE TESTS
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_logs_in_exactly_once() {
        let (addr, state) = spawn_server(1800).await;
        let client = test_client(addr);

        assert_eq!(state.login_count(), 0, "no login before first request");

        let accounts = client.accounts().list().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(state.login_count(), 1);

        // Second request within the validity window: no additional login.
        client.accounts().list().await.unwrap();
        assert_eq!(state.login_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_use_logs_in_once() {
        let (addr, state) = spawn_server(1800).await;
        let client = test_client(addr);

        let accounts_svc = client.accounts();
        let payments_svc = client.payments();
        let (a, b, c) = tokio::join!(
            accounts_svc.list(),
            payments_svc.list_with_filters(None),
            accounts_svc.list(),
        );
        a.unwrap();
        b.unwrap();
        c.unwrap();

        assert_eq!(
            state.login_count(),
            1,
            "racing callers must not double-authenticate"
        );
    }

    #[tokio::test]
    async fn test_expired_token_reauthenticates() {
        // Tokens expire immediately, so every request must re-login.
        let (addr, state) = spawn_server(0).await;
        let client = test_client(addr);

        client.accounts().list().await.unwrap();
        assert_eq!(state.login_count(), 1);

        client.accounts().list().await.unwrap();
        assert_eq!(state.login_count(), 2, "expired token triggers re-login");
    }

    #[tokio::test]
    async fn test_eager_authenticate() {
        let (addr, state) = spawn_server(1800).await;
        let client = test_client(addr);

        client.authenticate().await.unwrap();
        assert_eq!(state.login_count(), 1);
        assert!(!client.session().is_expired().await);

        client.accounts().list().await.unwrap();
        assert_eq!(state.login_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_credentials() {
        let (addr, state) = spawn_server(1800).await;
        let client = AirwallexClient::with_config(
            Credentials::new(CLIENT_ID, "wrong_key"),
            Environment::Demo,
            ClientConfig::new().with_base_url(format!("http://{addr}")),
        )
        .unwrap();

        let err = client.accounts().list().await.unwrap_err();
        assert!(err.is_auth_error(), "expected auth error, got {err:?}");
        assert_eq!(err.api_kind(), Some(ApiErrorKind::Authentication));
        assert_eq!(state.login_count(), 0);

        match err {
            Error::Api(e) => {
                assert_eq!(e.status, 401);
                assert_eq!(e.code.as_deref(), Some("credentials_invalid"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}

// ============================================================================
// ERROR MAPPING TESTS
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_maps_to_resource_not_found() {
        let (addr, _state) = spawn_server(1800).await;
        let client = test_client(addr);

        let err = client
            .accounts()
            .get(&AccountId::new("missing"))
            .await
            .unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::ResourceNotFound));
    }

    #[tokio::test]
    async fn test_error_code_wins_over_status() {
        let (addr, _state) = spawn_server(1800).await;
        let client = test_client(addr);

        let request = CreateBeneficiary {
            nickname: Some("dup".into()),
            entity_type: "PERSONAL".into(),
            bank_details: Default::default(),
            payment_methods: vec![],
        };
        let err = client.beneficiaries().create(&request).await.unwrap_err();

        // Status is 400 (Validation), but already_exists takes precedence.
        match err {
            Error::Api(e) => {
                assert_eq!(e.kind, ApiErrorKind::ResourceExists);
                assert_eq!(e.status, 400);
                assert_eq!(e.source.as_deref(), Some("nickname"));
                assert_eq!(
                    e.to_string(),
                    format!(
                        "Airwallex API Error (HTTP 400): [already_exists] \
                         Resource already exists (source: nickname) \
                         for POST http://{addr}/api/v1/beneficiaries/create"
                    )
                );
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_decode_error() {
        let (addr, _state) = spawn_server(1800).await;
        let client = test_client(addr);

        let err = client.balances().current().await.unwrap_err();
        assert!(
            matches!(err, Error::Decode(_)),
            "expected decode error, got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind a listener to reserve a port, then drop it.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = test_client(addr);
        let err = client.accounts().list().await.unwrap_err();
        assert!(
            err.is_transport(),
            "transport failures must not become API errors: {err:?}"
        );
    }
}

// ============================================================================
// PAGINATION TESTS
// ============================================================================

mod pagination_tests {
    use super::*;

    #[tokio::test]
    async fn test_eager_list_fetches_all_pages_in_order() {
        let (addr, state) = spawn_server(1800).await;
        let client = test_client(addr);

        let query = PaymentsQuery {
            page_size: Some(2),
            ..Default::default()
        };
        let payments = client.payments().list_with_filters(Some(query)).await.unwrap();

        let ids: Vec<&str> = payments.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["pay_0", "pay_1", "pay_2", "pay_3", "pay_4"]);
        // 5 items at 2 per page: pages 0, 1, 2.
        assert_eq!(state.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_lazy_stream_early_stop_fetches_one_page() {
        let (addr, state) = spawn_server(1800).await;
        let client = test_client(addr);

        let query = PaymentsQuery {
            page_size: Some(3),
            ..Default::default()
        };
        let mut stream = client.payments().list_stream(Some(query));

        let first = stream.next().await.unwrap().unwrap();
        let second = stream.next().await.unwrap().unwrap();
        assert_eq!(first.id.as_str(), "pay_0");
        assert_eq!(second.id.as_str(), "pay_1");
        drop(stream);

        assert_eq!(
            state.fetch_count(),
            1,
            "stopping mid-page must not pre-fetch the next page"
        );
    }

    #[tokio::test]
    async fn test_lazy_stream_drains_all_pages() {
        let (addr, state) = spawn_server(1800).await;
        let client = test_client(addr);

        let query = PaymentsQuery {
            page_size: Some(2),
            ..Default::default()
        };
        let mut stream = client.payments().list_stream(Some(query));
        let mut count = 0;
        while let Some(result) = stream.next().await {
            result.unwrap();
            count += 1;
        }

        assert_eq!(count, 5);
        assert_eq!(state.fetch_count(), 3);
        // Pagination reuses the token from the first page fetch.
        assert_eq!(state.login_count(), 1);
    }
}

// ============================================================================
// BLOCKING CLIENT TESTS
// ============================================================================

#[cfg(feature = "blocking")]
mod blocking_tests {
    use super::*;
    use airwallex_rs::blocking::BlockingClient;

    /// Serve the mock API from a background thread with its own runtime, so
    /// the blocking client can run on the test thread.
    fn spawn_server_thread(token_ttl_secs: i64) -> (SocketAddr, MockState) {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async move {
                let (addr, state) = spawn_server(token_ttl_secs).await;
                tx.send((addr, state)).unwrap();
                futures_util::future::pending::<()>().await;
            });
        });
        rx.recv().unwrap()
    }

    fn blocking_client(addr: SocketAddr) -> BlockingClient {
        BlockingClient::with_config(
            Credentials::new(CLIENT_ID, API_KEY),
            Environment::Demo,
            ClientConfig::new().with_base_url(format!("http://{addr}")),
        )
        .expect("client should build")
    }

    #[test]
    fn test_blocking_list_all_pages() {
        let (addr, state) = spawn_server_thread(1800);
        let client = blocking_client(addr);

        let payments: Vec<Payment> = client
            .list_all("/api/v1/payments", 2, None::<()>)
            .unwrap();
        let ids: Vec<&str> = payments.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["pay_0", "pay_1", "pay_2", "pay_3", "pay_4"]);
        assert_eq!(state.fetch_count(), 3);
        assert_eq!(state.login_count(), 1);
    }

    #[test]
    fn test_blocking_pages_early_stop() {
        let (addr, state) = spawn_server_thread(1800);
        let client = blocking_client(addr);

        let mut iter = client.pages::<Payment, ()>("/api/v1/payments", 3, None);
        let first = iter.next().unwrap().unwrap();
        let second = iter.next().unwrap().unwrap();
        assert_eq!(first.id.as_str(), "pay_0");
        assert_eq!(second.id.as_str(), "pay_1");
        drop(iter);

        assert_eq!(state.fetch_count(), 1);
    }

    #[test]
    fn test_blocking_token_reuse_and_error_mapping() {
        let (addr, state) = spawn_server_thread(1800);
        let client = blocking_client(addr);

        let accounts: Vec<Account> = client
            .list_all("/api/v1/accounts", 100, None::<()>)
            .unwrap();
        assert_eq!(accounts.len(), 1);

        let err = client
            .get::<Account>("/api/v1/accounts/missing")
            .unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::ResourceNotFound));

        assert_eq!(state.login_count(), 1, "both calls share one token");
    }
}
