use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use log::{error, info};
use serde::Serialize;

use crate::aggregator::{AggregateResult, AppState, aggregate};
use crate::error::ApiError;
use crate::news::provider::symbol_query;
use crate::news::{GENERAL_NEWS_QUERY, NewsArticle};
use crate::stock::{Quote, QuoteError};
use crate::symbols::{normalize_symbol, parse_symbol_list};

/// Article cap for the standalone news endpoints.
pub const STANDALONE_NEWS_LIMIT: usize = 10;

const INDEX_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Stock Market Data &amp; News Aggregator</title></head>\n<body>\n<h1>Stock Market Data &amp; News Aggregator</h1>\n<p>POST /get_stock_data with {\"symbols\": \"AAPL,MSFT\"} for combined quotes and news.</p>\n</body>\n</html>\n";

/// Response body for the news endpoints.
#[derive(Debug, Serialize)]
pub struct ArticleList {
    pub articles: Vec<NewsArticle>,
}

/// Landing page. The real front end is served separately; this just answers
/// health-check style requests to `/`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// `POST /get_stock_data` — the combined endpoint. Always 200 with partial
/// results once the input validates; upstream failures land in `errors`.
pub async fn get_stock_data(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AggregateResult>, ApiError> {
    let Json(body) =
        payload.map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))?;
    let raw = body.get("symbols").and_then(|v| v.as_str()).unwrap_or("");
    let symbols = parse_symbol_list(raw)?;

    info!("Combined lookup for {} symbol(s): {symbols:?}", symbols.len());
    Ok(Json(aggregate(&state, &symbols).await))
}

/// `GET /api/stock/{symbol}` — one quote, or 404 when the provider has
/// nothing for the symbol.
pub async fn stock_quote(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    let symbol = normalize_symbol(&symbol)?;
    match state.quotes.global_quote(&symbol).await {
        Ok(quote) => Ok(Json(quote)),
        Err(e) => {
            if matches!(e, QuoteError::Transport { .. }) {
                error!("Quote lookup failed for {symbol}: {e}");
            }
            Err(ApiError::from(e))
        }
    }
}

/// `GET /api/news` — general financial news, up to 10 articles.
pub async fn general_news(State(state): State<AppState>) -> Result<Json<ArticleList>, ApiError> {
    let articles = state
        .news
        .search(GENERAL_NEWS_QUERY, STANDALONE_NEWS_LIMIT)
        .await
        .map_err(|e| {
            error!("General news lookup failed: {e}");
            ApiError::from(e)
        })?;
    Ok(Json(ArticleList { articles }))
}

/// `GET /api/news/{symbol}` — symbol-biased news, up to 10 articles. A
/// failed search reads as "nothing found for this symbol".
pub async fn symbol_news(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ArticleList>, ApiError> {
    let symbol = normalize_symbol(&symbol)?;
    let articles = state
        .news
        .search(&symbol_query(&symbol), STANDALONE_NEWS_LIMIT)
        .await
        .map_err(|e| ApiError::NotFound(e.to_string()))?;
    Ok(Json(ArticleList { articles }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
