use clap::Parser;
use listing_dedupe::{distinct_exchange_codes, Error, ExchangeCountryTable, ListingReader};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

const UNKNOWN_COUNTRY: &str = "<unknown>";

/// Prints every exchange code used in a listings file along with its country, so gaps in the
/// exchange country table show up before a deduplication run.
#[derive(Parser)]
#[command(name = "list-exchange-codes")]
#[command(version)]
struct Cli {
    /// Listings CSV (may be .gz)
    input: PathBuf,

    /// Exchange code to country CSV to check against instead of the built-in table
    #[arg(long, value_name = "PATH")]
    table: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(unknown_count) => {
            eprintln!("{} exchange codes have no country", unknown_count);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Error listing exchange codes: {}", e);
            eprintln!("Error listing exchange codes: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of codes missing from the table.
fn run(cli: &Cli) -> Result<usize, Error> {
    let exchange_country_table = match &cli.table {
        Some(path) => ExchangeCountryTable::read_from_path(path)?,
        None => ExchangeCountryTable::embedded()?,
    };

    let listings = ListingReader::read_from_path(&cli.input)?;

    let mut unknown_count = 0;

    for exchange_code in distinct_exchange_codes(&listings) {
        match exchange_country_table.country_for(&exchange_code) {
            Ok(country) => println!("{}\t{}", exchange_code, country),
            Err(_) => {
                unknown_count += 1;
                println!("{}\t{}", exchange_code, UNKNOWN_COUNTRY);
            }
        }
    }

    Ok(unknown_count)
}
