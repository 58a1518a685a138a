use crate::constants::{COUNTRY_COLUMN, EXCHANGE_CODE_COLUMN};
use crate::types::{Country, ExchangeCode};
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

#[cfg(feature = "embed-bytes")]
const COMPRESSED_EXCHANGE_COUNTRY_TABLE_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/exchange_country_table.csv.gz"));

/// Maps the exchange code found at the end of a ticker (`GR` in `DFK:GR`) to the country the
/// exchange is located in.
///
/// The table is immutable once built. Build it once per run and hand it to the deduplicator by
/// reference; it is `Send + Sync` and can be shared across threads without locking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExchangeCountryTable {
    countries_by_code: HashMap<ExchangeCode, Country>,
}

impl ExchangeCountryTable {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<ExchangeCode>,
        V: Into<Country>,
    {
        Self {
            countries_by_code: entries
                .into_iter()
                .map(|(code, country)| (code.into(), country.into()))
                .collect(),
        }
    }

    /// The hand-curated table compiled into the crate.
    #[cfg(feature = "embed-bytes")]
    pub fn embedded() -> Result<Self, Error> {
        Self::extract_from_bytes(COMPRESSED_EXCHANGE_COUNTRY_TABLE_BYTES)
    }

    /// Decompress and parse a table from Gzip-compressed CSV bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if decompression or parsing fails.
    pub fn extract_from_bytes(read_bytes: &[u8]) -> Result<Self, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_from_string(&decompressed_data)
    }

    /// Reads a table from a CSV file; a path ending in `.gz` is decompressed first.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;

        if path.extension().is_some_and(|extension| extension == "gz") {
            Self::read_from_reader(GzDecoder::new(file))
        } else {
            Self::read_from_reader(file)
        }
    }

    /// Parse a table from a CSV-formatted string.
    ///
    /// # Notes
    ///
    /// Expects the column headers `Exchange Code` and `Country`. Codes are kept exactly as
    /// written (lookups are case-sensitive); a repeated code keeps its last country.
    pub fn read_from_string(csv_str: &str) -> Result<Self, Error> {
        Self::read_from_reader(Cursor::new(csv_str))
    }

    pub fn read_from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column_index = |column: &str| -> Result<usize, Error> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| Error::MissingField(column.to_string()))
        };

        let code_index = column_index(EXCHANGE_CODE_COLUMN)?;
        let country_index = column_index(COUNTRY_COLUMN)?;

        let mut countries_by_code = HashMap::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let code = record
                .get(code_index)
                .ok_or_else(|| Error::MissingField(EXCHANGE_CODE_COLUMN.to_string()))?;
            let country = record
                .get(country_index)
                .ok_or_else(|| Error::MissingField(COUNTRY_COLUMN.to_string()))?;

            countries_by_code.insert(code.to_string(), country.to_string());
        }

        Ok(Self { countries_by_code })
    }

    /// The country for an exchange code.
    ///
    /// # Errors
    ///
    /// `Error::UnknownExchangeCode` if the code has no entry.
    pub fn country_for(&self, code: &str) -> Result<&Country, Error> {
        self.countries_by_code
            .get(code)
            .ok_or_else(|| Error::UnknownExchangeCode(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.countries_by_code.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.countries_by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries_by_code.is_empty()
    }

    /// All known codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.countries_by_code.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
