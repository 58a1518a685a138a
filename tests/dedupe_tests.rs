use listing_dedupe::{
    dedupe_listings, dedupe_listings_with_custom_config, ClassificationFailurePolicy,
    ClassificationIssue, Deduplication, DeduplicatorConfig, Error, ExchangeCountryTable, Listing,
    Selection, DEFAULT_DEDUPLICATOR_CONFIG, STRICT_DEDUPLICATOR_CONFIG,
};
use std::collections::BTreeSet;

const CANADIAN_ADDRESS: &str = "1450 Meyerside Drive Suite 500 Mississauga, ON L5T 2N5 Canada";

fn listing(name: &str, address: &str, ticker: &str, market_cap: &str) -> Listing {
    Listing::from_fields([
        ("NAME", name),
        ("ADDRESS", address),
        ("MARKET_CAP", market_cap),
        ("TICKER", ticker),
        ("WEBSITE", "www.example.com"),
    ])
    .unwrap()
}

fn exchange_country_table() -> ExchangeCountryTable {
    ExchangeCountryTable::embedded().unwrap()
}

fn dedupe(listings: &[Listing]) -> Deduplication {
    dedupe_listings(listings, &exchange_country_table()).unwrap()
}

fn communique_listings() -> Vec<Listing> {
    vec![
        listing("01 Communique Laboratory Inc", CANADIAN_ADDRESS, "DFK:GR", "21.91"),
        listing("01 Communique Laboratory Inc", CANADIAN_ADDRESS, "ONE:CN", "35.21"),
        listing("01 Communique Laboratory Inc", CANADIAN_ADDRESS, "OCQLF:US", "32.47"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_market_beats_larger_foreign_listing() {
        let listings = vec![
            listing("Acme", CANADIAN_ADDRESS, "ACM:GR", "900"),
            listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "1"),
        ];

        let deduplication = dedupe(&listings);
        let company = deduplication.get("Acme").unwrap();

        assert_eq!(company.record.ticker(), "ACM:CN");
        assert_eq!(company.report.selection, Selection::SingleHomeListing);
    }

    #[test]
    fn test_tie_break_by_market_cap() {
        let listings = vec![
            listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "32.47"),
            listing("Acme", CANADIAN_ADDRESS, "ACMV:CN", "35.21"),
            listing("Acme", CANADIAN_ADDRESS, "ACM:US", "99.99"),
        ];

        let deduplication = dedupe(&listings);
        let company = deduplication.get("Acme").unwrap();

        assert_eq!(company.record.ticker(), "ACMV:CN");
        assert_eq!(company.record.get("MARKET_CAP"), Some("35.21"));
        assert_eq!(
            company.report.selection,
            Selection::HomeListingByMarketCap {
                home_listing_count: 2
            }
        );
    }

    #[test]
    fn test_fallback_takes_first_listing() {
        let address = "Clarendon House, Hamilton HM 11, Bermuda";
        let listings = vec![
            listing("Acme", address, "ACM:US", "1"),
            listing("Acme", address, "ACM:GR", "500"),
        ];

        let deduplication = dedupe(&listings);
        let company = deduplication.get("Acme").unwrap();

        assert_eq!(company.record.ticker(), "ACM:US");
        assert!(company.report.is_fallback());
        assert_eq!(company.report.address, address);
        assert_eq!(company.report.selected_ticker, "ACM:US");
        assert_eq!(company.report.all_tickers, "ACM:GR, ACM:US");
        assert_eq!(deduplication.fallback_count(), 1);
    }

    #[test]
    fn test_single_listing_passthrough() {
        let single = listing("Acme", "Somewhere", "ACM:ZZ", "n/a");

        let deduplication = dedupe(std::slice::from_ref(&single));
        let company = deduplication.get("Acme").unwrap();

        let mut expected_fields = single.fields().to_vec();
        expected_fields.push(("ALL_TICKERS".to_string(), "ACM:ZZ".to_string()));

        assert_eq!(company.record.fields(), expected_fields.as_slice());
        assert_eq!(company.report.selection, Selection::SingleListing);
        assert_eq!(company.report.listing_count, 1);
    }

    #[test]
    fn test_unknown_exchange_code_is_recorded() {
        let listings = vec![
            listing("Acme", CANADIAN_ADDRESS, "ACM:QQ", "10"),
            listing("Acme", CANADIAN_ADDRESS, "ACM:US", "10"),
        ];

        let deduplication = dedupe(&listings);
        let company = deduplication.get("Acme").unwrap();

        assert!(company.report.is_fallback());
        assert_eq!(
            company.report.issues,
            vec![ClassificationIssue::UnknownExchangeCode {
                ticker: "ACM:QQ".to_string(),
                exchange_code: "QQ".to_string(),
            }]
        );
        assert!(deduplication.has_issues());
        assert_eq!(deduplication.issue_count(), 1);
    }

    #[test]
    fn test_unknown_exchange_code_aborts_strict_run() {
        let listings = vec![
            listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "10"),
            listing("Acme", CANADIAN_ADDRESS, "ACM:QQ", "10"),
        ];

        let result = dedupe_listings_with_custom_config(
            &STRICT_DEDUPLICATOR_CONFIG,
            &listings,
            &exchange_country_table(),
        );

        assert!(matches!(result, Err(Error::UnknownExchangeCode(code)) if code == "QQ"));
    }

    #[test]
    fn test_malformed_ticker_policy_is_independent() {
        let config = DeduplicatorConfig {
            malformed_ticker_policy: ClassificationFailurePolicy::AbortRun,
            ..DEFAULT_DEDUPLICATOR_CONFIG
        };

        let unknown_code = vec![
            listing("Acme", CANADIAN_ADDRESS, "ACM:QQ", "10"),
            listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "10"),
        ];
        assert!(
            dedupe_listings_with_custom_config(&config, &unknown_code, &exchange_country_table())
                .is_ok()
        );

        let malformed = vec![
            listing("Acme", CANADIAN_ADDRESS, "ACM", "10"),
            listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "10"),
        ];
        assert!(matches!(
            dedupe_listings_with_custom_config(&config, &malformed, &exchange_country_table()),
            Err(Error::MalformedTicker(ticker)) if ticker == "ACM"
        ));
    }

    #[test]
    fn test_issues_do_not_affect_other_companies() {
        let listings = vec![
            listing("Broken", CANADIAN_ADDRESS, "BRK", "10"),
            listing("Broken", CANADIAN_ADDRESS, "BRK:QQ", "10"),
            listing("Fine", CANADIAN_ADDRESS, "FIN:US", "10"),
            listing("Fine", CANADIAN_ADDRESS, "FIN:CN", "10"),
        ];

        let deduplication = dedupe(&listings);

        assert_eq!(deduplication.len(), 2);
        assert_eq!(deduplication.get("Broken").unwrap().report.issues.len(), 2);
        assert_eq!(deduplication.get("Fine").unwrap().record.ticker(), "FIN:CN");
        assert!(!deduplication.get("Fine").unwrap().report.has_issues());
    }

    #[test]
    fn test_empty_input() {
        let deduplication = dedupe(&[]);

        assert!(deduplication.is_empty());
        assert_eq!(deduplication.into_records().len(), 0);
    }

    #[test]
    fn test_one_record_per_distinct_name() {
        let mut listings = communique_listings();
        listings.push(listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "1"));
        listings.push(listing("acme", CANADIAN_ADDRESS, "ACM2:CN", "1"));
        listings.push(listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "1"));

        let distinct_names: BTreeSet<&str> = listings.iter().map(|l| l.name()).collect();
        let deduplication = dedupe(&listings);

        assert_eq!(deduplication.len(), distinct_names.len());
        assert_eq!(
            deduplication
                .records()
                .map(|record| record.name())
                .collect::<BTreeSet<_>>(),
            distinct_names
        );
    }

    #[test]
    fn test_all_tickers_covers_group() {
        let mut listings = communique_listings();
        listings.push(listing(
            "01 Communique Laboratory Inc",
            CANADIAN_ADDRESS,
            "ONE:CN",
            "35.21",
        ));

        let deduplication = dedupe(&listings);
        let record = &deduplication.get("01 Communique Laboratory Inc").unwrap().record;

        assert_eq!(record.all_tickers(), "DFK:GR, OCQLF:US, ONE:CN");
        assert!(record.all_tickers().contains(record.ticker()));
    }

    #[test]
    fn test_output_is_ordered_by_name_and_repeatable() {
        let listings = vec![
            listing("Zeta", CANADIAN_ADDRESS, "Z:CN", "1"),
            listing("Alpha", CANADIAN_ADDRESS, "A:US", "1"),
            listing("Mu", CANADIAN_ADDRESS, "M:CN", "1"),
        ];

        let first = dedupe(&listings);
        let second = dedupe(&listings);

        assert_eq!(first, second);
        assert_eq!(
            first.records().map(|record| record.name()).collect::<Vec<_>>(),
            vec!["Alpha", "Mu", "Zeta"]
        );
    }

    #[test]
    fn test_schema_mismatch_aborts() {
        let listings = vec![
            listing("Acme", CANADIAN_ADDRESS, "ACM:CN", "1"),
            Listing::from_fields([
                ("NAME", "Other"),
                ("ADDRESS", CANADIAN_ADDRESS),
                ("MARKET_CAP", "1"),
                ("TICKER", "OTH:CN"),
            ])
            .unwrap(),
        ];

        assert!(matches!(
            dedupe_listings(&listings, &exchange_country_table()),
            Err(Error::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_custom_all_tickers_delimiter() {
        let config = DeduplicatorConfig {
            all_tickers_delimiter: ";",
            ..DEFAULT_DEDUPLICATOR_CONFIG
        };

        let deduplication = dedupe_listings_with_custom_config(
            &config,
            &communique_listings(),
            &exchange_country_table(),
        )
        .unwrap();

        assert_eq!(
            deduplication.records().next().unwrap().all_tickers(),
            "DFK:GR;OCQLF:US;ONE:CN"
        );
    }
}
