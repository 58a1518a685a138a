/// What to do when a listing's exchange cannot be determined while classifying a company's
/// listings as home or foreign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationFailurePolicy {
    /// Classify the listing as foreign, record the condition on the company's report, and
    /// keep going.
    TreatAsForeign,
    /// Stop the whole run with the underlying error.
    AbortRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeduplicatorConfig {
    pub unknown_exchange_code_policy: ClassificationFailurePolicy,
    pub malformed_ticker_policy: ClassificationFailurePolicy,
    /// Joins the sorted tickers in the `ALL_TICKERS` column.
    pub all_tickers_delimiter: &'static str,
}

impl Default for DeduplicatorConfig {
    fn default() -> Self {
        crate::constants::DEFAULT_DEDUPLICATOR_CONFIG
    }
}
