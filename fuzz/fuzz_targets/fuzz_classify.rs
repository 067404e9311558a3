#![no_main]

use kwix::utils::classify::{KeywordClassifier, StopWords};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|token: &str| {
    // Classify arbitrary tokens; anything that survives must be a
    // normalized keyword
    let classifier = KeywordClassifier::new(StopWords::from_words(["the", "and", "of"]));
    if let Some(keyword) = classifier.classify(token) {
        assert!(!keyword.is_empty());
        assert!(keyword.chars().all(char::is_alphabetic));
        assert_eq!(keyword, keyword.to_lowercase());
    }
});
