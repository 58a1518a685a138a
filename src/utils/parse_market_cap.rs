use crate::types::MarketCap;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a raw `MARKET_CAP` cell. Plain decimals (`"35.21"`) and scientific notation
/// (`"3.521e1"`) are accepted; surrounding whitespace is ignored. Anything else, including an
/// empty cell, yields `None`.
pub fn parse_market_cap(raw: &str) -> Option<MarketCap> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// An `f64` reading of a raw `MARKET_CAP` cell, used to rank values too large or too precise
/// for `MarketCap` (e.g. `"1e30"`). Falls back to the already parsed decimal; non-finite
/// values yield `None`.
pub fn parse_market_cap_approx(raw: &str, market_cap: Option<MarketCap>) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .or_else(|| market_cap.and_then(|market_cap| market_cap.to_f64()))
}
