//! News provider abstraction and the NewsAPI.org implementation.

pub mod newsapi;
pub mod provider;

pub use newsapi::{NEWSAPI_URL, NewsApi};
pub use provider::{GENERAL_NEWS_QUERY, NewsArticle, NewsError, NewsProvider};
