use crate::types::{CompanyName, ExchangeCode, TickerSymbol};
use std::fmt;

/// Which branch of the selection algorithm picked a company's representative listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The company has exactly one listing.
    SingleListing,
    /// Exactly one listing trades on an exchange in the company's home country.
    SingleHomeListing,
    /// Several home listings; the one with the largest market cap won.
    HomeListingByMarketCap { home_listing_count: usize },
    /// No home listing was found, so the first listing was taken. The choice among the
    /// foreign listings is arbitrary.
    NoHomeListingFallback,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::SingleListing => write!(f, "single listing"),
            Selection::SingleHomeListing => write!(f, "single home listing"),
            Selection::HomeListingByMarketCap { home_listing_count } => write!(
                f,
                "max market cap of {} home listings",
                home_listing_count
            ),
            Selection::NoHomeListingFallback => write!(f, "no home listing, first listing taken"),
        }
    }
}

/// A listing that could not be classified as home or foreign. The listing was treated as
/// foreign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationIssue {
    UnknownExchangeCode {
        ticker: TickerSymbol,
        exchange_code: ExchangeCode,
    },
    MalformedTicker {
        ticker: TickerSymbol,
    },
}

impl fmt::Display for ClassificationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationIssue::UnknownExchangeCode {
                ticker,
                exchange_code,
            } => write!(
                f,
                "ticker \"{}\" has unknown exchange code \"{}\"",
                ticker, exchange_code
            ),
            ClassificationIssue::MalformedTicker { ticker } => {
                write!(f, "ticker \"{}\" has no exchange code", ticker)
            }
        }
    }
}

/// Everything a diagnostics consumer needs to explain how one company was deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionReport {
    pub company_name: CompanyName,
    pub listing_count: usize,
    pub selection: Selection,
    pub selected_ticker: TickerSymbol,
    /// Address of the company's first listing.
    pub address: String,
    pub all_tickers: String,
    pub issues: Vec<ClassificationIssue>,
}

impl SelectionReport {
    /// True when no home listing was found and the representative was picked arbitrarily.
    pub fn is_fallback(&self) -> bool {
        self.selection == Selection::NoHomeListingFallback
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
