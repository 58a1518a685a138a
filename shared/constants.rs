#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static EXCHANGE_COUNTRY_TABLE_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "exchange_country_table.csv"));

pub static COMPRESSED_EXCHANGE_COUNTRY_TABLE_FILE_NAME: &str = "exchange_country_table.csv.gz";

pub static EXPECTED_FILE_EXTENSION: &str = "expected";
