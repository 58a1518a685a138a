use listing_dedupe::{
    dedupe_listings, CompanyName, Error as LibError, ExchangeCountryTable, ListingReader,
    TickerSymbol,
};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

pub mod constants;
pub mod models;
pub use models::EvaluationResult;

use constants::{
    COMMENT_PREFIX, EXPECTED_FALLBACK_PREFIX, EXPECTED_FILE_EXTENSION, EXPECTED_ISSUE_PREFIX,
    EXPECTED_PREFIX, EXPECTED_SELECTION_SEPARATOR, TEST_FILES_DIRECTORY,
};

/// All fixture CSV files in the test files directory, sorted by path.
pub fn get_test_files() -> Vec<PathBuf> {
    let mut test_files: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| path.extension().is_some_and(|extension| extension == "csv"))
        .collect();

    test_files.sort();
    test_files
}

/// The `.expected` file that sits next to a fixture CSV.
pub fn get_expected_file_path(test_file_path: &Path) -> PathBuf {
    test_file_path.with_extension(EXPECTED_FILE_EXTENSION)
}

fn read_prefixed_lines(file_path: &Path, prefix: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read expected file");

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .filter_map(|line| line.strip_prefix(prefix))
        .map(|rest| rest.trim().to_string())
        .collect()
}

// Helper function to get the expected selections, one `EXPECTED: <company> => <ticker>` per line
pub fn get_expected_selections(file_path: &Path) -> BTreeMap<CompanyName, TickerSymbol> {
    read_prefixed_lines(file_path, EXPECTED_PREFIX)
        .into_iter()
        .map(|line| {
            let (company_name, ticker) = line
                .rsplit_once(EXPECTED_SELECTION_SEPARATOR)
                .unwrap_or_else(|| panic!("Malformed EXPECTED line: {}", line));

            (company_name.trim().to_string(), ticker.trim().to_string())
        })
        .collect()
}

// Helper function to get the companies expected to fall back to their first listing
pub fn get_expected_fallbacks(file_path: &Path) -> BTreeSet<CompanyName> {
    read_prefixed_lines(file_path, EXPECTED_FALLBACK_PREFIX)
        .into_iter()
        .collect()
}

// Helper function to get the companies expected to report classification issues
pub fn get_expected_issues(file_path: &Path) -> BTreeSet<CompanyName> {
    read_prefixed_lines(file_path, EXPECTED_ISSUE_PREFIX)
        .into_iter()
        .collect()
}

// Helper function to run the deduplication for a fixture and compare it to its expectations
pub fn run_test_for_file(test_file_path: &Path) -> Result<EvaluationResult, LibError> {
    let exchange_country_table = ExchangeCountryTable::embedded()?;
    let listings = ListingReader::read_from_path(test_file_path)?;
    let deduplication = dedupe_listings(&listings, &exchange_country_table)?;

    let expected_file_path = get_expected_file_path(test_file_path);

    Ok(EvaluationResult::new(
        &get_expected_selections(&expected_file_path),
        &get_expected_fallbacks(&expected_file_path),
        &get_expected_issues(&expected_file_path),
        &deduplication,
    ))
}
