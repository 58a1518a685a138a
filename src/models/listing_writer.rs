use crate::{Error, RepresentativeRecord};
use csv::WriterBuilder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serializes representative records to CSV.
///
/// The header is taken from the first record; every other record is written in that column
/// order. An empty record set produces no output at all.
pub struct ListingWriter {}

impl ListingWriter {
    /// Writes records to a file. A path ending in `.gz` is Gzip-compressed.
    pub fn write_to_path<P: AsRef<Path>>(
        records: &[RepresentativeRecord],
        path: P,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path)?;

        if path.extension().is_some_and(|extension| extension == "gz") {
            let encoder =
                Self::write_to_writer(records, GzEncoder::new(file, Compression::default()))?;
            encoder.finish()?;
        } else {
            let mut file = Self::write_to_writer(records, file)?;
            file.flush()?;
        }

        Ok(())
    }

    pub fn write_to_string(records: &[RepresentativeRecord]) -> Result<String, Error> {
        let bytes = Self::write_to_writer(records, Vec::new())?;

        String::from_utf8(bytes).map_err(|e| Error::Other(e.to_string()))
    }

    /// Writes records to `writer` and hands it back once everything is flushed.
    ///
    /// # Errors
    ///
    /// `Error::SchemaMismatch` if a record lacks one of the header's fields.
    pub fn write_to_writer<W: Write>(
        records: &[RepresentativeRecord],
        writer: W,
    ) -> Result<W, Error> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        if let Some(first) = records.first() {
            let header: Vec<&str> = first.field_names().collect();
            csv_writer.write_record(&header)?;

            for record in records {
                let row = header
                    .iter()
                    .map(|field| {
                        record.get(field).ok_or_else(|| {
                            Error::SchemaMismatch(format!(
                                "record for company \"{}\" has no field \"{}\"",
                                record.name(),
                                field
                            ))
                        })
                    })
                    .collect::<Result<Vec<&str>, Error>>()?;

                csv_writer.write_record(&row)?;
            }
        }

        csv_writer
            .into_inner()
            .map_err(|e| Error::IoError(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Listing;

    fn record(fields: &[(&str, &str)], all_tickers: &str) -> RepresentativeRecord {
        let listing = Listing::from_fields(fields.iter().copied()).unwrap();
        RepresentativeRecord::from_listing(&listing, all_tickers.to_string())
    }

    #[test]
    fn test_write_to_string() {
        let records = vec![record(
            &[
                ("NAME", "Acme"),
                ("ADDRESS", "1 Main St, Ottawa, Canada"),
                ("TICKER", "ACM:CN"),
                ("MARKET_CAP", "12.5"),
            ],
            "ACM:CN, ACM:US",
        )];

        assert_eq!(
            ListingWriter::write_to_string(&records).unwrap(),
            "NAME,ADDRESS,TICKER,MARKET_CAP,ALL_TICKERS\n\
             Acme,\"1 Main St, Ottawa, Canada\",ACM:CN,12.5,\"ACM:CN, ACM:US\"\n"
        );
    }

    #[test]
    fn test_write_follows_first_record_column_order() {
        let records = vec![
            record(
                &[("NAME", "A"), ("ADDRESS", "x"), ("TICKER", "A:US"), ("MARKET_CAP", "1")],
                "A:US",
            ),
            record(
                &[("MARKET_CAP", "2"), ("TICKER", "B:US"), ("ADDRESS", "y"), ("NAME", "B")],
                "B:US",
            ),
        ];

        assert_eq!(
            ListingWriter::write_to_string(&records).unwrap(),
            "NAME,ADDRESS,TICKER,MARKET_CAP,ALL_TICKERS\nA,x,A:US,1,A:US\nB,y,B:US,2,B:US\n"
        );
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(ListingWriter::write_to_string(&[]).unwrap(), "");
    }
}
