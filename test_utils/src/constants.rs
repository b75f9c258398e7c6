pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const TEST_DATA_FILES_DIRECTORY: &str = "tests/test_data_files";

pub const EXPECTED_TOTAL_PREFIX: &str = "EXPECTED_TOTAL:";
pub const EXPECTED_TOP_PREFIX: &str = "EXPECTED_TOP:";
pub const EXPECTED_FREQUENCIES_CSV_PREFIX: &str = "EXPECTED_FREQUENCIES_CSV:";
pub const COMMENT_PREFIX: &str = "COMMENT:";

pub const DIRECTIVE_PREFIXES: &[&str] = &[
    EXPECTED_TOTAL_PREFIX,
    EXPECTED_TOP_PREFIX,
    EXPECTED_FREQUENCIES_CSV_PREFIX,
    COMMENT_PREFIX,
];
