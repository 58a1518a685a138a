use crate::models::{ClassificationFailurePolicy, DeduplicatorConfig};

pub const NAME_FIELD: &str = "NAME";
pub const ADDRESS_FIELD: &str = "ADDRESS";
pub const TICKER_FIELD: &str = "TICKER";
pub const MARKET_CAP_FIELD: &str = "MARKET_CAP";

/// Synthesized on every representative record.
pub const ALL_TICKERS_FIELD: &str = "ALL_TICKERS";

/// Fields every listing must carry for the selection algorithm to run.
pub const REQUIRED_FIELDS: [&str; 4] = [NAME_FIELD, ADDRESS_FIELD, TICKER_FIELD, MARKET_CAP_FIELD];

/// Separates the symbol from the exchange code in a `TICKER` value.
pub const EXCHANGE_CODE_SEPARATOR: char = ':';

pub const EXCHANGE_CODE_COLUMN: &str = "Exchange Code";
pub const COUNTRY_COLUMN: &str = "Country";

pub const DEFAULT_DEDUPLICATOR_CONFIG: DeduplicatorConfig = DeduplicatorConfig {
    unknown_exchange_code_policy: ClassificationFailurePolicy::TreatAsForeign,
    malformed_ticker_policy: ClassificationFailurePolicy::TreatAsForeign,
    all_tickers_delimiter: ", ",
};

pub const STRICT_DEDUPLICATOR_CONFIG: DeduplicatorConfig = DeduplicatorConfig {
    unknown_exchange_code_policy: ClassificationFailurePolicy::AbortRun,
    malformed_ticker_policy: ClassificationFailurePolicy::AbortRun,
    all_tickers_delimiter: ", ",
};
