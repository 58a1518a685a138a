use listing_dedupe::{dedupe_listings, ExchangeCountryTable, Listing};

fn main() {
    env_logger::init();

    let address = "1450 Meyerside Drive Suite 500 Mississauga, ON L5T 2N5 Canada";

    let listings: Vec<Listing> = [("DFK:GR", "21.91"), ("ONE:CN", "35.21"), ("OCQLF:US", "32.47")]
        .into_iter()
        .map(|(ticker, market_cap)| {
            Listing::from_fields([
                ("NAME", "01 Communique Laboratory Inc"),
                ("ADDRESS", address),
                ("TICKER", ticker),
                ("MARKET_CAP", market_cap),
            ])
            .unwrap()
        })
        .collect();

    let exchange_country_table = ExchangeCountryTable::embedded().unwrap();
    let deduplication = dedupe_listings(&listings, &exchange_country_table).unwrap();

    for company in deduplication.companies() {
        println!(
            "{}: {} ({}), all tickers: {}",
            company.report.company_name,
            company.record.ticker(),
            company.report.selection,
            company.record.all_tickers()
        );
    }
}
