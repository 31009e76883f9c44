use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Query used when no symbols bias the search.
pub const GENERAL_NEWS_QUERY: &str = "finance stock market";

/// Error types for news lookups. As with quotes, the `Display` strings are
/// the legacy error-list text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsError {
    /// Network request or HTTP-level failure
    #[error("Error fetching news: {detail}")]
    Transport { detail: String },

    /// The provider answered with a status other than "ok"
    #[error("News API Error: {message}")]
    Provider { message: String },
}

/// One article, reshaped from the provider's response. Provider relevance
/// order is preserved by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Trait for news providers; the production implementation is NewsAPI.org.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Search for articles, returning at most `limit` in provider order.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<NewsArticle>, NewsError>;
}

/// Build the search query for the combined endpoint: every symbol OR-joined,
/// with a finance qualifier to keep results on topic.
pub fn blended_query(symbols: &[String]) -> String {
    if symbols.is_empty() {
        GENERAL_NEWS_QUERY.to_string()
    } else {
        format!("{} finance", symbols.join(" OR "))
    }
}

/// Build the search query for the single-symbol news endpoint.
pub fn symbol_query(symbol: &str) -> String {
    format!("{symbol} finance")
}
