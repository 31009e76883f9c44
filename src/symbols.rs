use crate::error::ApiError;

/// Hard cap on symbols per combined request. Keeps one request from fanning
/// out into an unbounded number of upstream calls.
pub const MAX_SYMBOLS: usize = 10;

/// Parse a comma-separated symbol list: trim, uppercase, drop empty tokens.
/// Duplicates are kept and input order is preserved.
pub fn parse_symbol_list(raw: &str) -> Result<Vec<String>, ApiError> {
    let symbols: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    if symbols.is_empty() {
        return Err(ApiError::BadRequest("No symbols provided".to_string()));
    }
    if symbols.len() > MAX_SYMBOLS {
        return Err(ApiError::BadRequest(format!(
            "Too many symbols: {} (maximum is {MAX_SYMBOLS})",
            symbols.len()
        )));
    }

    Ok(symbols)
}

/// Normalize a single path-parameter symbol.
pub fn normalize_symbol(raw: &str) -> Result<String, ApiError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ApiError::BadRequest("Symbol cannot be empty".to_string()));
    }
    Ok(symbol)
}
