//! Error types for the Airwallex API client.
//!
//! All API-level failures are carried by a single [`ApiError`] value
//! parameterized by an [`ApiErrorKind`], so new Airwallex error codes can be
//! mapped without touching call sites. Transport failures and body-decoding
//! failures are distinct variants and are never folded into an API error.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Airwallex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Airwallex API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP exchange itself failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response body could not be decoded as the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid input provided to a client function.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The API returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// Returns `true` if this is a transport-level failure rather than an
    /// API-level one.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` if this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::Api(ApiError {
                kind: ApiErrorKind::Authentication,
                ..
            })
        )
    }

    /// Returns `true` if the API rejected the request with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Api(e) if (400..500).contains(&e.status))
    }

    /// Returns `true` if the API failed with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api(e) if e.status >= 500)
    }

    /// The API error kind, if this is an API error.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// Classification of an Airwallex API failure.
///
/// Selected from the response's `code` field when it is a known code,
/// otherwise from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// Credentials or token rejected (401, `credentials_invalid`).
    Authentication,
    /// The requested resource does not exist (404).
    ResourceNotFound,
    /// Too many requests (429).
    RateLimit,
    /// The request failed validation (400).
    Validation,
    /// Generic server failure (5xx).
    Server,
    /// The service is temporarily unavailable (503, `service_unavailable`).
    ServiceUnavailable,
    /// A resource with the same identity already exists (`already_exists`).
    ResourceExists,
    /// An amount fell outside the permitted limits (`amount_above_limit`).
    AmountLimit,
    /// The resource is not editable in its current state.
    EditForbidden,
    /// A currency or currency pair was rejected (`invalid_currency_pair`).
    Currency,
    /// A date field was rejected (`invalid_transfer_date`).
    Date,
    /// The transfer method is not supported for this route.
    TransferMethod,
    /// An FX conversion could not be performed.
    Conversion,
    /// Anything the tables above do not cover.
    Other,
}

impl ApiErrorKind {
    /// Look up a kind for an API error code.
    ///
    /// Returns `None` for codes outside the table; callers fall back to
    /// [`ApiErrorKind::from_status`].
    pub fn from_code(code: &str) -> Option<Self> {
        let kind = match code {
            "credentials_invalid" | "credentials_expired" | "token_expired" => {
                Self::Authentication
            }
            "already_exists" => Self::ResourceExists,
            "amount_above_limit" | "amount_below_limit" => Self::AmountLimit,
            "invalid_currency_pair" | "unsupported_currency" => Self::Currency,
            "invalid_transfer_date" => Self::Date,
            "service_unavailable" => Self::ServiceUnavailable,
            "edit_forbidden" | "not_editable" => Self::EditForbidden,
            "invalid_transfer_method" | "transfer_method_not_supported" => Self::TransferMethod,
            "conversion_failed" | "conversion_not_allowed" => Self::Conversion,
            _ => return None,
        };
        Some(kind)
    }

    /// Map an HTTP status to a kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Authentication,
            404 => Self::ResourceNotFound,
            429 => Self::RateLimit,
            400 => Self::Validation,
            503 => Self::ServiceUnavailable,
            s if s >= 500 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// A non-2xx response from the Airwallex API.
///
/// The `Display` form is stable and parsed by downstream log consumers:
///
/// ```text
/// Airwallex API Error (HTTP 400): [invalid_argument] The argument is invalid (source: amount) for GET /api/v1/test
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Classification of the failure.
    pub kind: ApiErrorKind,
    /// HTTP status code of the response.
    pub status: u16,
    /// API error code from the response body, when present.
    pub code: Option<String>,
    /// Human-readable message from the response body.
    pub message: String,
    /// The field implicated in a validation-style failure, when present.
    pub source: Option<String>,
    /// HTTP method of the originating request.
    pub method: String,
    /// URL of the originating request.
    pub url: String,
}

impl ApiError {
    /// Build an [`ApiError`] from a failed response.
    ///
    /// Pure: takes the status and the already-parsed body (or `None` when the
    /// body was not JSON) and never performs I/O. A known `code` in the body
    /// wins over the status mapping.
    pub fn from_response(status: u16, body: Option<&Value>, method: &str, url: &str) -> Self {
        let field = |name: &str| {
            body.and_then(|b| b.get(name))
                .and_then(Value::as_str)
                .map(String::from)
        };

        let code = field("code");
        let source = field("source");
        let message = field("message").unwrap_or_else(|| "Unknown API error".to_string());

        let kind = code
            .as_deref()
            .and_then(ApiErrorKind::from_code)
            .unwrap_or_else(|| ApiErrorKind::from_status(status));

        Self {
            kind,
            status,
            code,
            message,
            source,
            method: method.to_string(),
            url: url.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Airwallex API Error (HTTP {}): ", self.status)?;
        if let Some(code) = &self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, " (source: {})", source)?;
        }
        write!(f, " for {} {}", self.method, self.url)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(status: u16, body: Option<Value>) -> ApiError {
        ApiError::from_response(status, body.as_ref(), "GET", "/api/v1/test")
    }

    #[test]
    fn test_status_only_mapping() {
        assert_eq!(build(401, None).kind, ApiErrorKind::Authentication);
        assert_eq!(build(404, None).kind, ApiErrorKind::ResourceNotFound);
        assert_eq!(build(429, None).kind, ApiErrorKind::RateLimit);
        assert_eq!(build(400, None).kind, ApiErrorKind::Validation);
        assert_eq!(build(503, None).kind, ApiErrorKind::ServiceUnavailable);
        assert_eq!(build(500, None).kind, ApiErrorKind::Server);
        assert_eq!(build(502, None).kind, ApiErrorKind::Server);
        assert_eq!(build(418, None).kind, ApiErrorKind::Other);
    }

    #[test]
    fn test_status_only_carries_status() {
        let err = build(401, None);
        assert_eq!(err.status, 401);
        assert_eq!(err.code, None);
        assert_eq!(err.message, "Unknown API error");
    }

    #[test]
    fn test_code_mapping() {
        let cases = [
            ("credentials_invalid", ApiErrorKind::Authentication),
            ("already_exists", ApiErrorKind::ResourceExists),
            ("amount_above_limit", ApiErrorKind::AmountLimit),
            ("invalid_currency_pair", ApiErrorKind::Currency),
            ("invalid_transfer_date", ApiErrorKind::Date),
            ("service_unavailable", ApiErrorKind::ServiceUnavailable),
            ("transfer_method_not_supported", ApiErrorKind::TransferMethod),
            ("conversion_failed", ApiErrorKind::Conversion),
            ("not_editable", ApiErrorKind::EditForbidden),
        ];
        for (code, kind) in cases {
            let err = build(400, Some(json!({ "code": code, "message": "m" })));
            assert_eq!(err.kind, kind, "code {code}");
            assert_eq!(err.code.as_deref(), Some(code));
        }
    }

    #[test]
    fn test_code_wins_over_status() {
        // already_exists must map to ResourceExists regardless of status.
        for status in [400, 409, 422, 500] {
            let err = build(
                status,
                Some(json!({ "code": "already_exists", "message": "dup" })),
            );
            assert_eq!(err.kind, ApiErrorKind::ResourceExists);
            assert_eq!(err.status, status);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_status() {
        let err = build(404, Some(json!({ "code": "no_such_code", "message": "m" })));
        assert_eq!(err.kind, ApiErrorKind::ResourceNotFound);
        assert_eq!(err.code.as_deref(), Some("no_such_code"));
    }

    #[test]
    fn test_display_with_source() {
        let err = build(
            400,
            Some(json!({
                "code": "invalid_argument",
                "message": "The argument is invalid",
                "source": "amount"
            })),
        );
        assert_eq!(
            err.to_string(),
            "Airwallex API Error (HTTP 400): [invalid_argument] The argument is invalid \
             (source: amount) for GET /api/v1/test"
        );
    }

    #[test]
    fn test_display_without_source() {
        let err = build(
            400,
            Some(json!({
                "code": "invalid_argument",
                "message": "The argument is invalid"
            })),
        );
        assert_eq!(
            err.to_string(),
            "Airwallex API Error (HTTP 400): [invalid_argument] The argument is invalid \
             for GET /api/v1/test"
        );
    }

    #[test]
    fn test_display_without_code() {
        let err = build(500, None);
        assert_eq!(
            err.to_string(),
            "Airwallex API Error (HTTP 500): Unknown API error for GET /api/v1/test"
        );
    }

    #[test]
    fn test_error_predicates() {
        let auth: Error = build(401, None).into();
        assert!(auth.is_auth_error());
        assert!(auth.is_client_error());
        assert!(!auth.is_server_error());
        assert!(!auth.is_transport());

        let server: Error = build(500, None).into();
        assert!(server.is_server_error());
        assert_eq!(server.api_kind(), Some(ApiErrorKind::Server));
    }
}
