#[path = "../shared/lib.rs"]
mod shared;

pub use shared::constants::{EXPECTED_FILE_EXTENSION, TEST_FILES_DIRECTORY};

pub const EXPECTED_PREFIX: &str = "EXPECTED:";
pub const EXPECTED_FALLBACK_PREFIX: &str = "EXPECTED_FALLBACK:";
pub const EXPECTED_ISSUE_PREFIX: &str = "EXPECTED_ISSUE:";
pub const COMMENT_PREFIX: &str = "COMMENT:";

/// Separates the company name from the expected ticker on an `EXPECTED:` line.
pub const EXPECTED_SELECTION_SEPARATOR: &str = "=>";
