use rust_decimal::Decimal;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the name of a company as an owned `String`. Company identity is exact equality
/// of this value.
pub type CompanyName = String;

/// Represents a full ticker value as it appears in the `TICKER` column, e.g. `DFK:GR`.
pub type TickerSymbol = String;

/// The suffix of a ticker after its final colon, identifying the exchange (e.g. `GR`).
pub type ExchangeCode = String;

/// The name of the country where an exchange is located.
pub type Country = String;

/// A column name in the listings table.
pub type FieldName = String;

/// A raw, unparsed cell value in the listings table.
pub type FieldValue = String;

/// An ordered row of named fields. Order follows the source table's columns.
pub type FieldList = Vec<(FieldName, FieldValue)>;

/// Market capitalization, parsed from the `MARKET_CAP` column.
pub type MarketCap = Decimal;
