pub mod constants;

use constants::{
    DIRECTIVE_PREFIXES, EXPECTED_FREQUENCIES_CSV_PREFIX, EXPECTED_TOP_PREFIX,
    EXPECTED_TOTAL_PREFIX,
};
use csv::Reader;
use std::error::Error;
use std::fs;
use std::path::Path;
use word_frequency_analyzer::{
    analyze_text, RankedWord, StopWordSet, WordFrequency, WordFrequencyAnalyzer, WordFrequencyMap,
    DEFAULT_ANALYZER_CONFIG,
};

/// Utility to load an expected word frequency table (`word,frequency` rows) from a CSV file.
pub fn load_expected_frequencies(file_path: &str) -> Result<WordFrequencyMap, Box<dyn Error>> {
    let mut frequencies = WordFrequencyMap::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(word), Some(frequency)) if record.len() == 2 => {
                frequencies.insert(word.trim().to_string(), frequency.trim().parse()?);
            }
            _ => {
                eprintln!("Skipping invalid row: {:?}", record);
            }
        }
    }

    Ok(frequencies)
}

/// Reads a fixture file, dropping every directive line (`EXPECTED_*:` and `COMMENT:`).
pub fn load_fixture_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !DIRECTIVE_PREFIXES
                .iter()
                .any(|prefix| line.starts_with(prefix))
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to collect the values of all lines starting with the given directive
fn get_directive_values(file_path: &Path, prefix: &str) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(prefix)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

pub fn get_expected_total(file_path: &Path) -> Option<WordFrequency> {
    get_directive_values(file_path, EXPECTED_TOTAL_PREFIX)
        .first()
        .map(|value| value.parse::<WordFrequency>().expect("Invalid EXPECTED_TOTAL value"))
}

/// Parses `EXPECTED_TOP: word -> frequency` lines, in file order.
pub fn get_expected_top_words(file_path: &Path) -> Vec<RankedWord> {
    get_directive_values(file_path, EXPECTED_TOP_PREFIX)
        .iter()
        .map(|value| {
            let (word, frequency) = value
                .split_once("->")
                .expect("EXPECTED_TOP must look like `word -> frequency`");

            (
                word.trim().to_string(),
                frequency
                    .trim()
                    .parse::<WordFrequency>()
                    .expect("Invalid EXPECTED_TOP frequency"),
            )
        })
        .collect()
}

pub fn get_expected_frequencies_csv(file_path: &Path) -> Option<String> {
    get_directive_values(file_path, EXPECTED_FREQUENCIES_CSV_PREFIX)
        .into_iter()
        .next()
}

/// Analyzes a fixture file and asserts every expectation it declares.
pub fn run_test_for_file(test_file_path: &Path) {
    let text = load_fixture_text(test_file_path);
    let report = analyze_text(&text);

    if let Some(expected_total) = get_expected_total(test_file_path) {
        assert_eq!(
            report.total_word_count, expected_total,
            "Total word count mismatch in {:?}",
            test_file_path
        );
    }

    let expected_top_words = get_expected_top_words(test_file_path);
    if !expected_top_words.is_empty() {
        assert_eq!(
            report.top_words, expected_top_words,
            "Top words mismatch in {:?}",
            test_file_path
        );
    }

    if let Some(csv_path) = get_expected_frequencies_csv(test_file_path) {
        let expected_frequencies =
            load_expected_frequencies(&csv_path).expect("Failed to load expected frequencies");

        let analyzer = WordFrequencyAnalyzer::new(DEFAULT_ANALYZER_CONFIG, StopWordSet::default());
        assert_eq!(
            analyzer.build_frequency_map(&text),
            expected_frequencies,
            "Frequency table mismatch in {:?}",
            test_file_path
        );

        let total: WordFrequency = expected_frequencies.values().sum();
        assert_eq!(report.total_word_count, total);

        let mut expected_unique_words: Vec<_> = expected_frequencies.keys().cloned().collect();
        expected_unique_words.sort();
        expected_unique_words.truncate(report.unique_word_limit);

        assert_eq!(
            report.unique_words, expected_unique_words,
            "Unique words mismatch in {:?}",
            test_file_path
        );
    }
}
