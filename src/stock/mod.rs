//! Quote provider abstraction and the Alpha Vantage implementation.

pub mod alpha_vantage;
pub mod provider;

pub use alpha_vantage::{ALPHA_VANTAGE_URL, AlphaVantage};
pub use provider::{Quote, QuoteError, QuoteProvider};
