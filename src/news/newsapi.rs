use async_trait::async_trait;
use reqwest::Client;

use super::provider::{NewsArticle, NewsError, NewsProvider};

pub const NEWSAPI_URL: &str = "https://newsapi.org";

/// NewsAPI.org client for the `/v2/everything` search endpoint. Like the
/// quote client, the base URL is injectable for tests.
#[derive(Debug, Clone)]
pub struct NewsApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApi {
    pub fn new(client: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn transport(error: impl std::fmt::Display) -> NewsError {
        NewsError::Transport {
            detail: error.to_string(),
        }
    }
}

#[async_trait]
impl NewsProvider for NewsApi {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<NewsArticle>, NewsError> {
        log::debug!("Searching news: '{query}' (limit {limit})");

        let url = format!("{}/v2/everything", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("apiKey", self.api_key.as_str()),
                ("language", "en"),
                ("sortBy", "relevancy"),
            ])
            .send()
            .await
            .map_err(Self::transport)?
            .error_for_status()
            .map_err(Self::transport)?;

        let data: serde_json::Value = response.json().await.map_err(Self::transport)?;
        parse_search_response(&data, limit)
    }
}

/// Interpret a search payload. The provider signals failure in-band with a
/// non-"ok" status plus a message field.
fn parse_search_response(
    data: &serde_json::Value,
    limit: usize,
) -> Result<Vec<NewsArticle>, NewsError> {
    if data.get("status").and_then(|s| s.as_str()) != Some("ok") {
        let message = data
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string();
        return Err(NewsError::Provider { message });
    }

    let field = |article: &serde_json::Value, key: &str| {
        article
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    };

    let articles = data
        .get("articles")
        .and_then(|a| a.as_array())
        .map(|articles| {
            articles
                .iter()
                .take(limit)
                .map(|article| NewsArticle {
                    title: field(article, "title"),
                    description: field(article, "description"),
                    url: field(article, "url"),
                    published_at: field(article, "publishedAt"),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_payload(count: usize) -> serde_json::Value {
        let articles: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "title": format!("Article {i}"),
                    "description": format!("Summary {i}"),
                    "url": format!("https://example.com/{i}"),
                    "publishedAt": "2026-08-28T12:00:00Z"
                })
            })
            .collect();
        json!({ "status": "ok", "articles": articles })
    }

    #[test]
    fn test_parse_ok_response() {
        let articles = parse_search_response(&ok_payload(3), 5).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title.as_deref(), Some("Article 0"));
        assert_eq!(articles[2].url.as_deref(), Some("https://example.com/2"));
        assert_eq!(
            articles[0].published_at.as_deref(),
            Some("2026-08-28T12:00:00Z")
        );
    }

    #[test]
    fn test_parse_applies_limit_in_order() {
        let articles = parse_search_response(&ok_payload(8), 5).unwrap();
        assert_eq!(articles.len(), 5);
        // Provider relevance order is preserved
        assert_eq!(articles[4].title.as_deref(), Some("Article 4"));
    }

    #[test]
    fn test_parse_error_status_with_message() {
        let data = json!({ "status": "error", "message": "apiKeyInvalid" });
        let error = parse_search_response(&data, 5).unwrap_err();
        assert_eq!(
            error,
            NewsError::Provider {
                message: "apiKeyInvalid".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_error_status_without_message() {
        let data = json!({ "status": "error" });
        let error = parse_search_response(&data, 5).unwrap_err();
        assert_eq!(format!("{error}"), "News API Error: Unknown error");
    }

    #[test]
    fn test_parse_ok_without_articles_field() {
        let data = json!({ "status": "ok" });
        let articles = parse_search_response(&data, 5).unwrap();
        assert!(articles.is_empty());
    }
}
