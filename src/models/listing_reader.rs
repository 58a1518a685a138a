use crate::{Error, Listing};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Loads listings from CSV, with the column names in the header row.
pub struct ListingReader {}

impl ListingReader {
    /// Reads listings from a file. A path ending in `.gz` is decompressed on the fly.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the CSV is malformed, or a row lacks one
    /// of the required fields.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;

        if path.extension().is_some_and(|extension| extension == "gz") {
            Self::read_from_reader(GzDecoder::new(file))
        } else {
            Self::read_from_reader(file)
        }
    }

    /// Decompress and parse listings from Gzip-compressed CSV bytes.
    pub fn extract_from_bytes(read_bytes: &[u8]) -> Result<Vec<Listing>, Error> {
        Self::read_from_reader(GzDecoder::new(read_bytes))
    }

    pub fn read_from_string(csv_str: &str) -> Result<Vec<Listing>, Error> {
        Self::read_from_reader(Cursor::new(csv_str))
    }

    pub fn read_from_reader<R: Read>(reader: R) -> Result<Vec<Listing>, Error> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let mut listings = Vec::new();

        for (row_index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                Error::ParserError(format!("Failed to read record {}: {}", row_index + 1, e))
            })?;

            listings.push(Listing::from_fields(headers.iter().zip(record.iter()))?);
        }

        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_from_string() {
        let csv = "NAME,ADDRESS,TICKER,MARKET_CAP,WEBSITE\n\
                   Acme,\"1 Main St, Ottawa, Canada\",ACM:CN,12.5,www.acme.example\n";

        let listings = ListingReader::read_from_string(csv).unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].address(), "1 Main St, Ottawa, Canada");
        assert_eq!(listings[0].get("WEBSITE"), Some("www.acme.example"));
    }

    #[test]
    fn test_read_from_string_missing_column() {
        let csv = "NAME,ADDRESS,TICKER\nAcme,Canada,ACM:CN\n";

        assert!(matches!(
            ListingReader::read_from_string(csv),
            Err(Error::MissingField(field)) if field == "MARKET_CAP"
        ));
    }

    #[test]
    fn test_read_from_string_ragged_row() {
        let csv = "NAME,ADDRESS,TICKER,MARKET_CAP\nAcme,Canada,ACM:CN\n";

        assert!(matches!(
            ListingReader::read_from_string(csv),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_headers_only() {
        let listings = ListingReader::read_from_string("NAME,ADDRESS,TICKER,MARKET_CAP\n").unwrap();

        assert!(listings.is_empty());
    }
}
