use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::news::provider::NewsError;
use crate::stock::provider::QuoteError;

/// Handler-level error taxonomy. Every variant renders as
/// `{"error": "<message>"}` with the matching status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing client input
    #[error("{0}")]
    BadRequest(String),

    /// Lookup yielded nothing usable
    #[error("{0}")]
    NotFound(String),

    /// Upstream or server failure the client cannot fix
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Single-quote lookups: a provider-reported error or an empty payload is
/// the client's "not found"; a transport failure is ours.
impl From<QuoteError> for ApiError {
    fn from(error: QuoteError) -> Self {
        let message = error.to_string();
        match error {
            QuoteError::Transport { .. } => ApiError::Internal(message),
            QuoteError::Provider { .. } | QuoteError::NoData { .. } => ApiError::NotFound(message),
        }
    }
}

impl From<NewsError> for ApiError {
    fn from(error: NewsError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = ApiError::BadRequest("No symbols provided".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No symbols provided");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError::NotFound("nothing here".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_internal_response() {
        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_quote_error_mapping() {
        let transport = QuoteError::Transport {
            symbol: "AAPL".to_string(),
            detail: "connection refused".to_string(),
        };
        assert!(matches!(ApiError::from(transport), ApiError::Internal(_)));

        let no_data = QuoteError::NoData {
            symbol: "ZZZZ".to_string(),
        };
        let mapped = ApiError::from(no_data);
        assert!(matches!(&mapped, ApiError::NotFound(_)));
        assert_eq!(
            mapped.to_string(),
            "No data found for ZZZZ from Alpha Vantage."
        );
    }
}
