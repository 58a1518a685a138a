use crate::models::{
    ClassificationFailurePolicy, ClassificationIssue, DeduplicatorConfig, Selection,
    SelectionReport,
};
use crate::utils::join_unique_tickers;
use crate::{Error, ExchangeCountryTable, Listing};
use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// All listings sharing one exact company name, in input order.
///
/// A group always holds at least one listing.
#[derive(Debug, Clone)]
pub struct CompanyGroup<'a> {
    name: &'a str,
    listings: Vec<&'a Listing>,
}

impl<'a> CompanyGroup<'a> {
    pub fn new(first_listing: &'a Listing) -> Self {
        Self {
            name: first_listing.name(),
            listings: vec![first_listing],
        }
    }

    /// Partitions `listings` by exact company name. Groups come back ordered by name; within a
    /// group, listings keep their input order.
    pub fn group_by_name(listings: &'a [Listing]) -> Vec<CompanyGroup<'a>> {
        let mut groups_by_name: BTreeMap<&'a str, CompanyGroup<'a>> = BTreeMap::new();

        for listing in listings {
            groups_by_name
                .entry(listing.name())
                .and_modify(|group| group.listings.push(listing))
                .or_insert_with(|| CompanyGroup::new(listing));
        }

        groups_by_name.into_values().collect()
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn listings(&self) -> &[&'a Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// The address of the first listing; listings sharing a name share an address.
    pub fn address(&self) -> &'a str {
        self.listings[0].address()
    }

    /// Every ticker in the group, deduplicated, sorted and joined with `delimiter`.
    pub fn all_tickers(&self, delimiter: &str) -> String {
        join_unique_tickers(self.listings.iter().map(|listing| listing.ticker()), delimiter)
    }

    /// Picks the listing that best represents the company's home market.
    ///
    /// # Errors
    ///
    /// Only when `config` says to abort the run on an unclassifiable listing; otherwise such
    /// listings count as foreign and are reported in `SelectionReport::issues`.
    pub fn select_representative(
        &self,
        exchange_country_table: &ExchangeCountryTable,
        config: &DeduplicatorConfig,
    ) -> Result<(&'a Listing, SelectionReport), Error> {
        let all_tickers = self.all_tickers(config.all_tickers_delimiter);
        let mut issues = Vec::new();

        let (selected, selection) = if self.listings.len() == 1 {
            debug!("For company \"{}\" there is only one listing.", self.name);

            (self.listings[0], Selection::SingleListing)
        } else {
            debug!(
                "Company \"{}\" has {} listings, time to deduplicate.",
                self.name,
                self.listings.len()
            );

            let home_listings =
                self.collect_home_listings(exchange_country_table, config, &mut issues)?;

            match home_listings.len() {
                0 => (self.listings[0], Selection::NoHomeListingFallback),
                1 => {
                    debug!("Found 1 home listing for company \"{}\"", self.name);

                    (home_listings[0], Selection::SingleHomeListing)
                }
                home_listing_count => {
                    debug!(
                        "Found {} home listings for company \"{}\", choosing by max market cap.",
                        home_listing_count, self.name
                    );

                    (
                        max_by_market_cap(&home_listings),
                        Selection::HomeListingByMarketCap { home_listing_count },
                    )
                }
            }
        };

        let report = SelectionReport {
            company_name: self.name.to_string(),
            listing_count: self.listings.len(),
            selection,
            selected_ticker: selected.ticker().to_string(),
            address: self.address().to_string(),
            all_tickers,
            issues,
        };

        Ok((selected, report))
    }

    fn collect_home_listings(
        &self,
        exchange_country_table: &ExchangeCountryTable,
        config: &DeduplicatorConfig,
        issues: &mut Vec<ClassificationIssue>,
    ) -> Result<Vec<&'a Listing>, Error> {
        let mut home_listings = Vec::new();

        for &listing in &self.listings {
            match listing.is_home_listing(exchange_country_table) {
                Ok(true) => home_listings.push(listing),
                Ok(false) => {}
                Err(Error::UnknownExchangeCode(exchange_code)) => {
                    if config.unknown_exchange_code_policy == ClassificationFailurePolicy::AbortRun
                    {
                        return Err(Error::UnknownExchangeCode(exchange_code));
                    }

                    issues.push(ClassificationIssue::UnknownExchangeCode {
                        ticker: listing.ticker().to_string(),
                        exchange_code,
                    });
                }
                Err(Error::MalformedTicker(ticker)) => {
                    if config.malformed_ticker_policy == ClassificationFailurePolicy::AbortRun {
                        return Err(Error::MalformedTicker(ticker));
                    }

                    issues.push(ClassificationIssue::MalformedTicker { ticker });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(home_listings)
    }
}

/// The listing with the numerically largest market cap. Unparsed market caps rank lowest and
/// values too large for `MarketCap` still compare by magnitude; on a tie the earliest listing
/// wins.
fn max_by_market_cap<'a>(listings: &[&'a Listing]) -> &'a Listing {
    let mut best = listings[0];

    for &listing in &listings[1..] {
        if listing.cmp_market_cap(best) == Ordering::Greater {
            best = listing;
        }
    }

    best
}
