use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error types for quote lookups. The `Display` strings are exactly what
/// the combined endpoint reports in its `errors` list, so existing front-end
/// consumers keep seeing the same text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// Network request or HTTP-level failure
    #[error("Error fetching stock data for {symbol}: {detail}")]
    Transport { symbol: String, detail: String },

    /// The provider answered with an application-level error message
    #[error("Alpha Vantage Error for {symbol}: {message}")]
    Provider { symbol: String, message: String },

    /// The provider answered with an empty or unrecognized payload
    #[error("No data found for {symbol} from Alpha Vantage.")]
    NoData { symbol: String },
}

/// Point-in-time quote for one symbol. Values stay the decimal strings the
/// provider reports; a field the provider omitted serializes as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol as reported by the provider
    pub symbol: Option<String>,
    /// Current price
    pub price: Option<String>,
    /// Change from previous close
    pub change: Option<String>,
    /// Trading volume
    pub volume: Option<String>,
}

/// Trait for quote providers. The production implementation talks to Alpha
/// Vantage; tests substitute fakes so no handler test touches the network.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the current global quote for one normalized symbol.
    async fn global_quote(&self, symbol: &str) -> Result<Quote, QuoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_matches_legacy_text() {
        let error = QuoteError::Provider {
            symbol: "ZZZZ".to_string(),
            message: "Invalid API call.".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "Alpha Vantage Error for ZZZZ: Invalid API call."
        );

        let error = QuoteError::NoData {
            symbol: "ZZZZ".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "No data found for ZZZZ from Alpha Vantage."
        );

        let error = QuoteError::Transport {
            symbol: "AAPL".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "Error fetching stock data for AAPL: connection refused"
        );
    }

    #[test]
    fn test_quote_serializes_missing_fields_as_null() {
        let quote = Quote {
            symbol: Some("AAPL".to_string()),
            price: Some("150.25".to_string()),
            change: None,
            volume: None,
        };
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["symbol"], "AAPL");
        assert_eq!(value["price"], "150.25");
        assert!(value["change"].is_null());
        assert!(value["volume"].is_null());
    }
}
