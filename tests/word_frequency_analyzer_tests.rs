use word_frequency_analyzer::{
    analyze_text, analyze_text_with_custom_config, StopWordSet, Tokenizer,
    WordFrequencyAnalyzer, WordFrequencyAnalyzerConfig, WordFrequencyMap, DEFAULT_ANALYZER_CONFIG,
};

fn default_analyzer() -> WordFrequencyAnalyzer<'static> {
    WordFrequencyAnalyzer::new(DEFAULT_ANALYZER_CONFIG, StopWordSet::default())
}

fn frequency_map(entries: &[(&str, u64)]) -> WordFrequencyMap {
    entries
        .iter()
        .map(|(word, frequency)| (word.to_string(), *frequency))
        .collect()
}

const SAMPLE_TEXTS: &[&str] = &[
    "",
    "The Cat sat on the Mat. The cat's hat!",
    "dog dog cat cat cat bird",
    "Call me Ishmael. Some years ago, never mind how long precisely, having little or no \
     money in my purse, and nothing particular to interest me on shore, I thought I would \
     sail about a little and see the watery part of the world.",
    "It is a way I have of driving off the spleen, and regulating the circulation. Whenever \
     I find myself growing grim about the mouth; whenever it is a damp, drizzly November in \
     my soul; whenever I find myself involuntarily pausing before coffin warehouses, and \
     bringing up the rear of every funeral I meet.",
    "a an the and or 123 !!! s t",
];

#[cfg(test)]
mod build_frequency_map_tests {
    use super::*;

    #[test]
    fn test_cat_sat_on_the_mat() {
        let frequencies =
            default_analyzer().build_frequency_map("The Cat sat on the Mat. The cat's hat!");

        // "cat's" splits into "cat" and "s"; "s" is a stop word
        assert_eq!(
            frequencies,
            frequency_map(&[("cat", 2), ("sat", 1), ("mat", 1), ("hat", 1)])
        );
    }

    #[test]
    fn test_counts_every_occurrence() {
        let frequencies = default_analyzer().build_frequency_map("dog dog cat cat cat bird");

        assert_eq!(
            frequencies,
            frequency_map(&[("dog", 2), ("cat", 3), ("bird", 1)])
        );
    }

    #[test]
    fn test_case_insensitive_counting() {
        let frequencies = default_analyzer().build_frequency_map("Whale WHALE whale wHaLe");

        assert_eq!(frequencies, frequency_map(&[("whale", 4)]));
    }

    #[test]
    fn test_only_stop_words() {
        let frequencies = default_analyzer().build_frequency_map("The and OR but It's");

        assert!(frequencies.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(default_analyzer().build_frequency_map("").is_empty());
    }

    #[test]
    fn test_custom_stop_words() {
        let analyzer =
            WordFrequencyAnalyzer::new(DEFAULT_ANALYZER_CONFIG, StopWordSet::from_words(&["cat"]));

        let frequencies = analyzer.build_frequency_map("the cat sat");

        assert_eq!(frequencies, frequency_map(&[("the", 1), ("sat", 1)]));
    }

    #[test]
    fn test_keys_are_lowercase_ascii_and_never_stop_words() {
        let analyzer = default_analyzer();

        for text in SAMPLE_TEXTS {
            let frequencies = analyzer.build_frequency_map(text);

            for (word, frequency) in &frequencies {
                assert!(!word.is_empty());
                assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{}", word);
                assert!(!analyzer.is_stop_word(word), "{}", word);
                assert!(*frequency >= 1);
            }
        }
    }
}

#[cfg(test)]
mod compute_report_tests {
    use super::*;

    #[test]
    fn test_top_words_by_frequency() {
        let report = analyze_text("dog dog cat cat cat bird");

        assert_eq!(report.total_word_count, 6);
        assert_eq!(
            report.top_words,
            vec![
                ("cat".to_string(), 3),
                ("dog".to_string(), 2),
                ("bird".to_string(), 1)
            ]
        );
        assert_eq!(report.unique_words, vec!["bird", "cat", "dog"]);
        assert_eq!(report.derive_name(3), None);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let report = analyze_text("whale harpoon ocean captain");

        assert_eq!(
            report.top_words,
            vec![
                ("captain".to_string(), 1),
                ("harpoon".to_string(), 1),
                ("ocean".to_string(), 1),
                ("whale".to_string(), 1)
            ]
        );
        assert_eq!(report.derive_name(10), None);
    }

    #[test]
    fn test_top_words_are_truncated_to_five() {
        let report = analyze_text("f f f f f f e e e e e d d d d c c c b b a2 g");

        assert_eq!(
            report.top_words,
            vec![
                ("f".to_string(), 6),
                ("e".to_string(), 5),
                ("d".to_string(), 4),
                ("c".to_string(), 3),
                ("b".to_string(), 2)
            ]
        );
        assert_eq!(report.derive_name(5), Some("f_b_5ms".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let report = analyze_text("");

        assert_eq!(report.total_word_count, 0);
        assert!(report.top_words.is_empty());
        assert!(report.unique_words.is_empty());
        assert_eq!(report.derive_name(0), None);
    }

    #[test]
    fn test_unique_words_are_truncated_to_fifty() {
        // 26 * 3 two-letter words, minus the stop words "by" and "my"
        let text: Vec<String> = ('a'..='z')
            .flat_map(|first| ["x", "y", "z"].map(|second| format!("{}{}", first, second)))
            .collect();
        let report = analyze_text(&text.join(" "));

        assert_eq!(report.total_word_count, 76);
        assert_eq!(report.unique_words.len(), 50);
        assert_eq!(report.unique_words.first().map(String::as_str), Some("ax"));
        assert_eq!(report.unique_words.last().map(String::as_str), Some("rx"));
    }

    #[test]
    fn test_custom_limits() {
        let config = WordFrequencyAnalyzerConfig {
            top_n: 2,
            unique_word_limit: 1,
        };
        let report = analyze_text_with_custom_config(
            &config,
            StopWordSet::default(),
            "dog dog cat cat cat bird",
        );

        assert_eq!(
            report.top_words,
            vec![("cat".to_string(), 3), ("dog".to_string(), 2)]
        );
        assert_eq!(report.unique_words, vec!["bird"]);
        assert_eq!(report.total_word_count, 6);
    }

    #[test]
    fn test_report_invariants() {
        let analyzer = default_analyzer();

        for text in SAMPLE_TEXTS {
            let frequencies = analyzer.build_frequency_map(text);
            let report = analyzer.compute_report(&frequencies);
            let distinct_words = frequencies.len();

            let token_count = Tokenizer::tokenize_normalized(text)
                .filter(|word| !analyzer.is_stop_word(word))
                .count() as u64;
            assert_eq!(report.total_word_count, frequencies.values().sum::<u64>());
            assert_eq!(report.total_word_count, token_count);

            assert_eq!(report.top_words.len(), distinct_words.min(5));
            assert!(report.top_words.windows(2).all(|pair| {
                pair[0].1 > pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].0 < pair[1].0)
            }));

            assert_eq!(report.unique_words.len(), distinct_words.min(50));
            assert!(report.unique_words.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = default_analyzer();

        for text in SAMPLE_TEXTS {
            assert_eq!(
                analyzer.build_frequency_map(text),
                analyzer.build_frequency_map(text)
            );
            assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
        }
    }
}
