pub mod distinct_exchange_codes;
pub mod exchange_code_from_ticker;
pub mod join_unique_tickers;
pub mod parse_market_cap;

pub use distinct_exchange_codes::distinct_exchange_codes;
pub use exchange_code_from_ticker::exchange_code_from_ticker;
pub use join_unique_tickers::join_unique_tickers;
pub use parse_market_cap::{parse_market_cap, parse_market_cap_approx};
