use crate::constants::{ADDRESS_FIELD, MARKET_CAP_FIELD, NAME_FIELD, TICKER_FIELD};
use crate::types::{FieldList, FieldName, FieldValue, MarketCap};
use crate::utils::{exchange_code_from_ticker, parse_market_cap, parse_market_cap_approx};
use crate::{Error, ExchangeCountryTable};
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashSet;

/// A company's presence on a single stock exchange: one row of the listings table.
///
/// All fields are kept in source column order and written back out untouched; the four fields
/// the selection algorithm relies on (`NAME`, `ADDRESS`, `TICKER`, `MARKET_CAP`) are validated
/// on construction and exposed through typed accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    fields: FieldList,
    name_index: usize,
    address_index: usize,
    ticker_index: usize,
    market_cap_index: usize,
    market_cap: Option<MarketCap>,
    market_cap_approx: Option<f64>,
}

impl Listing {
    /// Builds a listing from `(field name, value)` pairs.
    ///
    /// # Errors
    ///
    /// - `Error::MissingField` if any of `NAME`, `ADDRESS`, `TICKER` or `MARKET_CAP` is absent.
    /// - `Error::SchemaMismatch` if a field name appears more than once.
    ///
    /// # Notes
    ///
    /// A `MARKET_CAP` value that does not parse as a number is kept verbatim but ranks below
    /// every parsed value when breaking ties between home listings. Values beyond the range of
    /// `MarketCap` (e.g. `1e30`) have no `market_cap()` but still rank by their `f64` value.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: Into<FieldValue>,
    {
        let fields: FieldList = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        let mut seen_names = HashSet::with_capacity(fields.len());
        for (name, _) in &fields {
            if !seen_names.insert(name.as_str()) {
                return Err(Error::SchemaMismatch(format!(
                    "field \"{}\" appears more than once",
                    name
                )));
            }
        }

        let position_of = |field: &str| -> Result<usize, Error> {
            fields
                .iter()
                .position(|(name, _)| name == field)
                .ok_or_else(|| Error::MissingField(field.to_string()))
        };

        let name_index = position_of(NAME_FIELD)?;
        let address_index = position_of(ADDRESS_FIELD)?;
        let ticker_index = position_of(TICKER_FIELD)?;
        let market_cap_index = position_of(MARKET_CAP_FIELD)?;

        let raw_market_cap = &fields[market_cap_index].1;
        let market_cap = parse_market_cap(raw_market_cap);
        let market_cap_approx = parse_market_cap_approx(raw_market_cap, market_cap);

        if market_cap.is_none() && market_cap_approx.is_some() {
            debug!(
                "Listing \"{}\" for company \"{}\" has out of range market cap \"{}\"",
                fields[ticker_index].1, fields[name_index].1, raw_market_cap
            );
        } else if market_cap.is_none() {
            if raw_market_cap.trim().is_empty() {
                debug!(
                    "Listing \"{}\" for company \"{}\" has no market cap",
                    fields[ticker_index].1, fields[name_index].1
                );
            } else {
                warn!(
                    "Listing \"{}\" for company \"{}\" has unparsable market cap \"{}\"",
                    fields[ticker_index].1, fields[name_index].1, raw_market_cap
                );
            }
        }

        Ok(Self {
            fields,
            name_index,
            address_index,
            ticker_index,
            market_cap_index,
            market_cap,
            market_cap_approx,
        })
    }

    pub fn name(&self) -> &str {
        &self.fields[self.name_index].1
    }

    pub fn address(&self) -> &str {
        &self.fields[self.address_index].1
    }

    pub fn ticker(&self) -> &str {
        &self.fields[self.ticker_index].1
    }

    /// The parsed market cap, or `None` when the cell is empty or not a number.
    pub fn market_cap(&self) -> Option<MarketCap> {
        self.market_cap
    }

    /// Orders two listings by market cap. Exact decimal comparison is used when both values fit
    /// in `MarketCap`, `f64` otherwise; a listing without a numeric market cap ranks lowest.
    pub fn cmp_market_cap(&self, other: &Listing) -> Ordering {
        match (self.market_cap, other.market_cap) {
            (Some(market_cap), Some(other_market_cap)) => market_cap.cmp(&other_market_cap),
            _ => match (self.market_cap_approx, other.market_cap_approx) {
                (Some(approx), Some(other_approx)) => {
                    approx.partial_cmp(&other_approx).unwrap_or(Ordering::Equal)
                }
                (approx, other_approx) => approx.is_some().cmp(&other_approx.is_some()),
            },
        }
    }

    /// The `MARKET_CAP` cell exactly as it was read.
    pub fn raw_market_cap(&self) -> &str {
        &self.fields[self.market_cap_index].1
    }

    /// Looks up any field by name, required or not.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> &[(FieldName, FieldValue)] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// The exchange code portion of this listing's ticker (after the final colon).
    pub fn exchange_code(&self) -> Result<&str, Error> {
        exchange_code_from_ticker(self.ticker())
    }

    /// Whether the country of this listing's exchange appears in the listing's address.
    ///
    /// The match is a case-sensitive substring test with no normalization.
    ///
    /// # Errors
    ///
    /// Propagates `Error::MalformedTicker` and `Error::UnknownExchangeCode`.
    pub fn is_home_listing(
        &self,
        exchange_country_table: &ExchangeCountryTable,
    ) -> Result<bool, Error> {
        let exchange_code = self.exchange_code()?;
        let country = exchange_country_table.country_for(exchange_code)?;

        Ok(self.address().contains(country.as_str()))
    }

    pub(crate) fn into_fields(self) -> FieldList {
        self.fields
    }
}
