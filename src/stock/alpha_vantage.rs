use async_trait::async_trait;
use reqwest::Client;

use super::provider::{Quote, QuoteError, QuoteProvider};

pub const ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage quote provider over plain reqwest. The base URL is a
/// constructor parameter so tests can point the client at a fake endpoint.
#[derive(Debug, Clone)]
pub struct AlphaVantage {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantage {
    pub fn new(client: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn transport(symbol: &str, error: impl std::fmt::Display) -> QuoteError {
        QuoteError::Transport {
            symbol: symbol.to_string(),
            detail: error.to_string(),
        }
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantage {
    async fn global_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        log::debug!("Fetching quote for symbol: {symbol}");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Self::transport(symbol, e))?
            .error_for_status()
            .map_err(|e| Self::transport(symbol, e))?;

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Self::transport(symbol, e))?;

        parse_global_quote(symbol, &data)
    }
}

/// Interpret a GLOBAL_QUOTE payload. The provider reports errors in-band:
/// an "Error Message" field for bad requests, and an empty "Global Quote"
/// object for symbols it does not know.
fn parse_global_quote(symbol: &str, data: &serde_json::Value) -> Result<Quote, QuoteError> {
    if let Some(quote) = data.get("Global Quote").and_then(|v| v.as_object()) {
        if quote.is_empty() {
            return Err(QuoteError::NoData {
                symbol: symbol.to_string(),
            });
        }
        let field = |key: &str| {
            quote
                .get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        };
        return Ok(Quote {
            symbol: field("01. symbol"),
            price: field("05. price"),
            change: field("09. change"),
            volume: field("06. volume"),
        });
    }

    if let Some(message) = data.get("Error Message").and_then(|v| v.as_str()) {
        return Err(QuoteError::Provider {
            symbol: symbol.to_string(),
            message: message.to_string(),
        });
    }

    Err(QuoteError::NoData {
        symbol: symbol.to_string(),
    })
}
