use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinSet;

use crate::config::{AppConfig, UPSTREAM_TIMEOUT_SECS};
use crate::news::provider::blended_query;
use crate::news::{NEWSAPI_URL, NewsApi, NewsArticle, NewsProvider};
use crate::stock::{ALPHA_VANTAGE_URL, AlphaVantage, Quote, QuoteProvider};

/// Article cap for the combined endpoint; the standalone news endpoints
/// return up to twice as many.
pub const COMBINED_NEWS_LIMIT: usize = 5;

/// Shared handler state: one provider of each kind behind its trait, so
/// tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteProvider>,
    pub news: Arc<dyn NewsProvider>,
}

impl AppState {
    /// Wire up the production providers from configuration. A single reqwest
    /// client with a bounded timeout is shared by both.
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            quotes: Arc::new(AlphaVantage::new(
                client.clone(),
                config.alpha_vantage_api_key.clone(),
                ALPHA_VANTAGE_URL,
            )),
            news: Arc::new(NewsApi::new(
                client,
                config.news_api_key.clone(),
                NEWSAPI_URL,
            )),
        })
    }
}

/// Combined endpoint response body.
#[derive(Debug, Serialize)]
pub struct AggregateResult {
    pub stock_data: Vec<Quote>,
    pub news_data: Vec<NewsArticle>,
    pub errors: Vec<String>,
}

/// Fetch quotes for every symbol plus one blended news search, collecting
/// failures as strings instead of failing the request. Quote fetches run
/// concurrently; results are re-sorted by input index so the output order
/// always matches the input order.
pub async fn aggregate(state: &AppState, symbols: &[String]) -> AggregateResult {
    let mut tasks = JoinSet::new();
    for (index, symbol) in symbols.iter().enumerate() {
        let quotes = Arc::clone(&state.quotes);
        let symbol = symbol.clone();
        tasks.spawn(async move { (index, quotes.global_quote(&symbol).await) });
    }

    let mut indexed_quotes = Vec::new();
    let mut errors = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, Ok(quote))) => indexed_quotes.push((index, quote)),
            Ok((index, Err(error))) => {
                log::warn!("Quote fetch failed for {}: {error}", symbols[index]);
                errors.push(error.to_string());
            }
            Err(error) => {
                log::error!("Quote task panicked: {error}");
                errors.push(format!("Internal error fetching stock data: {error}"));
            }
        }
    }
    indexed_quotes.sort_by_key(|(index, _)| *index);

    let news_data = match state
        .news
        .search(&blended_query(symbols), COMBINED_NEWS_LIMIT)
        .await
    {
        Ok(articles) => articles,
        Err(error) => {
            log::warn!("News fetch failed: {error}");
            errors.push(error.to_string());
            Vec::new()
        }
    };

    AggregateResult {
        stock_data: indexed_quotes.into_iter().map(|(_, quote)| quote).collect(),
        news_data,
        errors,
    }
}
