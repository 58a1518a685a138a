use crate::constants::{ALL_TICKERS_FIELD, NAME_FIELD, TICKER_FIELD};
use crate::types::{FieldList, FieldName, FieldValue};
use crate::Listing;

/// The merged output row for one company: the selected listing's fields plus `ALL_TICKERS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentativeRecord {
    fields: FieldList,
}

impl RepresentativeRecord {
    /// Copies `listing`'s fields and overlays `ALL_TICKERS`. An existing `ALL_TICKERS` column is
    /// overwritten in place, otherwise the column is appended.
    pub fn from_listing(listing: &Listing, all_tickers: String) -> Self {
        let mut fields = listing.clone().into_fields();

        match fields.iter_mut().find(|(name, _)| name == ALL_TICKERS_FIELD) {
            Some((_, value)) => *value = all_tickers,
            None => fields.push((ALL_TICKERS_FIELD.to_string(), all_tickers)),
        }

        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn name(&self) -> &str {
        self.get(NAME_FIELD).unwrap_or_default()
    }

    pub fn ticker(&self) -> &str {
        self.get(TICKER_FIELD).unwrap_or_default()
    }

    pub fn all_tickers(&self) -> &str {
        self.get(ALL_TICKERS_FIELD).unwrap_or_default()
    }

    pub fn fields(&self) -> &[(FieldName, FieldValue)] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn into_fields(self) -> FieldList {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_all_tickers() {
        let listing = Listing::from_fields([
            ("NAME", "Acme"),
            ("ADDRESS", "Ottawa, Canada"),
            ("TICKER", "ACM:CN"),
            ("MARKET_CAP", "1.00"),
        ])
        .unwrap();

        let record = RepresentativeRecord::from_listing(&listing, "ACM:CN, ACM:US".to_string());

        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec!["NAME", "ADDRESS", "TICKER", "MARKET_CAP", "ALL_TICKERS"]
        );
        assert_eq!(record.name(), "Acme");
        assert_eq!(record.ticker(), "ACM:CN");
        assert_eq!(record.all_tickers(), "ACM:CN, ACM:US");
    }

    #[test]
    fn test_overwrites_existing_all_tickers_in_place() {
        let listing = Listing::from_fields([
            ("ALL_TICKERS", "stale"),
            ("NAME", "Acme"),
            ("ADDRESS", "Ottawa, Canada"),
            ("TICKER", "ACM:CN"),
            ("MARKET_CAP", "1.00"),
        ])
        .unwrap();

        let record = RepresentativeRecord::from_listing(&listing, "ACM:CN".to_string());

        assert_eq!(record.fields()[0], ("ALL_TICKERS".to_string(), "ACM:CN".to_string()));
        assert_eq!(record.fields().len(), 5);
    }
}
