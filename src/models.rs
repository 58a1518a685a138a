pub mod company_group;
pub use company_group::CompanyGroup;

pub mod config;
pub use config::{ClassificationFailurePolicy, DeduplicatorConfig};

pub mod deduplication;
pub use deduplication::{DedupedCompany, Deduplication};

pub mod deduplicator;
pub use deduplicator::Deduplicator;

pub mod error;
pub use error::Error;

pub mod exchange_country_table;
pub use exchange_country_table::ExchangeCountryTable;

pub mod listing;
pub use listing::Listing;

pub mod listing_reader;
pub use listing_reader::ListingReader;

pub mod listing_writer;
pub use listing_writer::ListingWriter;

pub mod representative_record;
pub use representative_record::RepresentativeRecord;

pub mod selection_report;
pub use selection_report::{ClassificationIssue, Selection, SelectionReport};
