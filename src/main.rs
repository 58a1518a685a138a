use clap::Parser;
use env_logger::{Builder, Env, Target};
use listing_dedupe::{
    dedupe_listings_with_custom_config, Deduplication, Error, ExchangeCountryTable,
    ListingReader, ListingWriter, SelectionReport, DEFAULT_DEDUPLICATOR_CONFIG,
    STRICT_DEDUPLICATOR_CONFIG,
};
use log::{error, info, log, Level};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "listing-dedupe-cli")]
#[command(about = "Keep one home-market listing per company from a CSV of exchange listings")]
#[command(version)]
struct Cli {
    /// Listings CSV (may be .gz) with NAME, ADDRESS, TICKER and MARKET_CAP columns
    input: PathBuf,

    /// Where to write the deduplicated CSV (.gz to compress)
    output: PathBuf,

    /// Abort on unknown exchange codes and malformed tickers instead of treating them as foreign
    #[arg(long)]
    strict: bool,

    /// Exchange code to country CSV to use instead of the built-in table
    #[arg(long, value_name = "PATH")]
    exchange_table: Option<PathBuf>,

    /// Log to stderr instead of `<INPUT>.log`
    #[arg(long)]
    log_stderr: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logger(&cli) {
        eprintln!("Failed to set up logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(deduplication) => {
            if deduplication.has_issues() {
                eprintln!(
                    "Done with {} unclassifiable listings; see the log for details.",
                    deduplication.issue_count()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error deduplicating listings: {}", e);
            eprintln!("Error deduplicating listings: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to a file named after the input (`listings.csv` -> `listings.csv.log`) unless
/// `--log-stderr` is given. `RUST_LOG` overrides the default `warn` level.
fn init_logger(cli: &Cli) -> std::io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    if !cli.log_stderr {
        let log_file = File::create(log_file_path(&cli.input))?;
        builder.target(Target::Pipe(Box::new(log_file)));
    }

    builder.init();

    Ok(())
}

fn log_file_path(input: &Path) -> PathBuf {
    let mut log_file_path = input.as_os_str().to_owned();
    log_file_path.push(".log");
    PathBuf::from(log_file_path)
}

fn run(cli: &Cli) -> Result<Deduplication, Error> {
    let exchange_country_table = match &cli.exchange_table {
        Some(path) => ExchangeCountryTable::read_from_path(path)?,
        None => ExchangeCountryTable::embedded()?,
    };

    let listings = ListingReader::read_from_path(&cli.input)?;
    info!(
        "Loaded {} company listings from \"{}\"",
        listings.len(),
        cli.input.display()
    );

    let config = if cli.strict {
        &STRICT_DEDUPLICATOR_CONFIG
    } else {
        &DEFAULT_DEDUPLICATOR_CONFIG
    };

    let deduplication =
        dedupe_listings_with_custom_config(config, &listings, &exchange_country_table)?;

    for report in deduplication.reports() {
        log_selection_report(report);
    }

    let records = deduplication.records().cloned().collect::<Vec<_>>();
    ListingWriter::write_to_path(&records, &cli.output)?;
    info!(
        "Wrote {} deduped listings to file \"{}\".",
        records.len(),
        cli.output.display()
    );

    Ok(deduplication)
}

fn log_selection_report(report: &SelectionReport) {
    for (level, message) in selection_report_messages(report) {
        log!(level, "{}", message);
    }
}

/// What the log says about one company: a warning per unclassifiable listing, three warnings
/// when no home listing was found, or a single info line otherwise.
fn selection_report_messages(report: &SelectionReport) -> Vec<(Level, String)> {
    let mut messages: Vec<(Level, String)> = report
        .issues
        .iter()
        .map(|issue| {
            (
                Level::Warn,
                format!(
                    "Treating listing of company \"{}\" as foreign: {}",
                    report.company_name, issue
                ),
            )
        })
        .collect();

    if report.is_fallback() {
        messages.push((
            Level::Warn,
            format!(
                "No home listing found for company \"{}\" located at \"{}\"",
                report.company_name, report.address
            ),
        ));
        messages.push((
            Level::Warn,
            format!(
                "Tickers for company \"{}\" are: {}",
                report.company_name, report.all_tickers
            ),
        ));
        messages.push((
            Level::Warn,
            format!(
                "Picking ticker \"{}\" as representative listing for company \"{}\"",
                report.selected_ticker, report.company_name
            ),
        ));
    } else {
        messages.push((
            Level::Info,
            format!(
                "Company \"{}\": {} listings, picked \"{}\" ({})",
                report.company_name, report.listing_count, report.selected_ticker, report.selection
            ),
        ));
    }

    messages
}
