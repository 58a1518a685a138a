//! Deduplicates a table of stock-exchange listings into one record per company.
//!
//! A company traded on several exchanges shows up once per exchange. For each company name,
//! the listing on an exchange in the company's home country (the exchange's country appears in
//! the company's address) is kept; several home listings are decided by market cap, and a
//! company with no home listing keeps its first listing. Every record gains an `ALL_TICKERS`
//! column listing all of the company's tickers.

mod constants;
pub use constants::{
    ADDRESS_FIELD, ALL_TICKERS_FIELD, DEFAULT_DEDUPLICATOR_CONFIG, MARKET_CAP_FIELD, NAME_FIELD,
    REQUIRED_FIELDS, STRICT_DEDUPLICATOR_CONFIG, TICKER_FIELD,
};
pub mod models;
pub use models::{
    ClassificationFailurePolicy, ClassificationIssue, CompanyGroup, DedupedCompany, Deduplication,
    Deduplicator, DeduplicatorConfig, Error, ExchangeCountryTable, Listing, ListingReader,
    ListingWriter, RepresentativeRecord, Selection, SelectionReport,
};
pub mod types;
mod utils;
pub use types::{
    CompanyName, Country, ExchangeCode, FieldList, FieldName, FieldValue, MarketCap, TickerSymbol,
};
pub use utils::{distinct_exchange_codes, exchange_code_from_ticker, join_unique_tickers};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Deduplicates `listings` with the default configuration: listings that cannot be classified
/// count as foreign and are reported rather than failing the run.
pub fn dedupe_listings(
    listings: &[Listing],
    exchange_country_table: &ExchangeCountryTable,
) -> Result<Deduplication, Error> {
    let deduplication = dedupe_listings_with_custom_config(
        &DEFAULT_DEDUPLICATOR_CONFIG,
        listings,
        exchange_country_table,
    )?;

    Ok(deduplication)
}

pub fn dedupe_listings_with_custom_config(
    deduplicator_config: &DeduplicatorConfig,
    listings: &[Listing],
    exchange_country_table: &ExchangeCountryTable,
) -> Result<Deduplication, Error> {
    let deduplicator = Deduplicator::new(deduplicator_config, exchange_country_table);

    deduplicator.dedupe(listings)
}
