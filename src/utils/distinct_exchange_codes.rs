use crate::types::ExchangeCode;
use crate::Listing;
use log::warn;
use std::collections::BTreeSet;

/// Collects the distinct exchange codes used by `listings`, sorted ascending.
///
/// Listings whose ticker carries no exchange code are skipped with a warning.
pub fn distinct_exchange_codes(listings: &[Listing]) -> Vec<ExchangeCode> {
    let mut exchange_codes = BTreeSet::new();

    for listing in listings {
        match listing.exchange_code() {
            Ok(exchange_code) => {
                exchange_codes.insert(exchange_code);
            }
            Err(err) => warn!("Skipping listing of \"{}\": {}", listing.name(), err),
        }
    }

    exchange_codes.into_iter().map(str::to_string).collect()
}
