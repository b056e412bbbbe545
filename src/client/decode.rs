//! Mode-independent response handling.
//!
//! The async and blocking dispatchers differ only in how the bytes move;
//! everything after the exchange completes — success/failure split, JSON
//! decoding, exception mapping — lives here so both modes share one code
//! path.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::Result;

/// Resolve a request path against the configured base URL.
pub(crate) fn resolve_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path)
}

/// Decode a completed exchange into the caller's type.
///
/// A 2xx status decodes the body as JSON; a decode failure surfaces as
/// [`crate::Error::Decode`], never as an API error. Any other status routes
/// through [`ApiError::from_response`], feeding it the parsed body when the
/// body is JSON and `None` otherwise.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: u16,
    bytes: &[u8],
    method: &str,
    url: &str,
) -> Result<T> {
    if (200..300).contains(&status) {
        Ok(serde_json::from_slice(bytes)?)
    } else {
        let body: Option<Value> = serde_json::from_slice(bytes).ok();
        Err(ApiError::from_response(status, body.as_ref(), method, url).into())
    }
}

/// Like [`decode_response`] but for endpoints whose success body is ignored.
pub(crate) fn ensure_success(status: u16, bytes: &[u8], method: &str, url: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        let body: Option<Value> = serde_json::from_slice(bytes).ok();
        Err(ApiError::from_response(status, body.as_ref(), method, url).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiErrorKind, Error};

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Body {
        id: String,
    }

    #[test]
    fn test_success_decodes_json() {
        let body: Body = decode_response(200, br#"{"id":"x"}"#, "GET", "/u").unwrap();
        assert_eq!(body, Body { id: "x".into() });
    }

    #[test]
    fn test_success_with_bad_json_is_decode_error() {
        let err = decode_response::<Body>(200, b"not json", "GET", "/u").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_failure_maps_through_factory() {
        let err = decode_response::<Body>(
            404,
            br#"{"code":"not_found","message":"gone"}"#,
            "GET",
            "/api/v1/accounts/x",
        )
        .unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::ResourceNotFound));
    }

    #[test]
    fn test_failure_with_non_json_body_maps_by_status() {
        let err = decode_response::<Body>(429, b"<html>slow down</html>", "GET", "/u").unwrap_err();
        assert_eq!(err.api_kind(), Some(ApiErrorKind::RateLimit));
    }

    #[test]
    fn test_ensure_success_passes_2xx() {
        assert!(ensure_success(204, b"", "DELETE", "/u").is_ok());
    }

    #[test]
    fn test_ensure_success_maps_failure() {
        let err = ensure_success(401, b"", "DELETE", "/u").unwrap_err();
        assert!(err.is_auth_error());
    }
}
