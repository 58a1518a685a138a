use crate::models::{
    CompanyGroup, DedupedCompany, Deduplication, DeduplicatorConfig, RepresentativeRecord,
};
use crate::{Error, ExchangeCountryTable, Listing};
use log::info;
use std::collections::BTreeSet;

/// Reduces a table of listings to one representative record per company.
///
/// Each company is handled independently: listings are grouped by exact name, classified as
/// home or foreign against `exchange_country_table`, and the best home listing (or, failing
/// that, the first listing) becomes the company's record.
pub struct Deduplicator<'a> {
    config: &'a DeduplicatorConfig,
    exchange_country_table: &'a ExchangeCountryTable,
}

impl<'a> Deduplicator<'a> {
    pub fn new(
        config: &'a DeduplicatorConfig,
        exchange_country_table: &'a ExchangeCountryTable,
    ) -> Self {
        Self {
            config,
            exchange_country_table,
        }
    }

    /// Runs the deduplication over `listings`.
    ///
    /// # Errors
    ///
    /// - `Error::SchemaMismatch` if the listings do not all carry the same set of fields.
    /// - `Error::UnknownExchangeCode` / `Error::MalformedTicker`, only when the configured
    ///   policy for that condition is `AbortRun`.
    pub fn dedupe(&self, listings: &[Listing]) -> Result<Deduplication, Error> {
        validate_schema(listings)?;

        let groups = CompanyGroup::group_by_name(listings);
        info!(
            "Found {} unique company names in {} listings.",
            groups.len(),
            listings.len()
        );

        let mut companies = Vec::with_capacity(groups.len());

        for group in &groups {
            let (selected, report) =
                group.select_representative(self.exchange_country_table, self.config)?;

            let record = RepresentativeRecord::from_listing(selected, report.all_tickers.clone());

            companies.push(DedupedCompany { record, report });
        }

        let deduplication = Deduplication::new(companies);

        info!(
            "Deduplicated to {} listings ({} without a home listing, {} unclassifiable listings).",
            deduplication.len(),
            deduplication.fallback_count(),
            deduplication.issue_count()
        );

        Ok(deduplication)
    }
}

/// Every listing must expose the same field names as the first one, so that all output
/// records can share one header.
fn validate_schema(listings: &[Listing]) -> Result<(), Error> {
    let Some(first) = listings.first() else {
        return Ok(());
    };

    let expected: BTreeSet<&str> = first.field_names().collect();

    for (index, listing) in listings.iter().enumerate().skip(1) {
        let actual: BTreeSet<&str> = listing.field_names().collect();

        if actual != expected {
            let missing: Vec<&str> = expected.difference(&actual).copied().collect();
            let unexpected: Vec<&str> = actual.difference(&expected).copied().collect();

            return Err(Error::SchemaMismatch(format!(
                "listing {} (\"{}\", ticker \"{}\") is missing fields {:?} \
                 and has unexpected fields {:?}",
                index,
                listing.name(),
                listing.ticker(),
                missing,
                unexpected
            )));
        }
    }

    Ok(())
}
