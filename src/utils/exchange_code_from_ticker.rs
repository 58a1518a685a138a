use crate::constants::EXCHANGE_CODE_SEPARATOR;
use crate::Error;

/// Extracts the exchange code from a full ticker value.
///
/// The exchange code is everything after the *last* colon, so `"BRK:A:US"` yields `"US"`.
///
/// ### Errors:
/// - `Error::MalformedTicker` if the ticker has no colon, or nothing follows the final one.
///
/// ### Example:
/// ```rust
/// use listing_dedupe::exchange_code_from_ticker;
///
/// assert_eq!(exchange_code_from_ticker("DFK:GR").unwrap(), "GR");
/// assert!(exchange_code_from_ticker("DFK").is_err());
/// ```
pub fn exchange_code_from_ticker(ticker: &str) -> Result<&str, Error> {
    match ticker.rsplit_once(EXCHANGE_CODE_SEPARATOR) {
        Some((_, code)) if !code.is_empty() => Ok(code),
        _ => Err(Error::MalformedTicker(ticker.to_string())),
    }
}
