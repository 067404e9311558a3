//! Keyword classification: deciding which raw tokens become index terms.
//!
//! A token survives classification when, after trailing punctuation is
//! stripped and the token is lowercased, it is non-empty, not a stop word,
//! and made of letters only. Everything else never reaches the index.

use rustc_hash::FxHashSet;

/// Sentence punctuation stripped from the end of a token.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Words excluded from the index, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// Build the set, normalizing every entry to lowercase so membership
    /// checks against lowercased candidates are case-insensitive.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Membership check. `word` must already be lowercased; classifier
    /// output always is.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Classifies whitespace-delimited tokens into index keywords.
#[derive(Debug)]
pub struct KeywordClassifier {
    stop_words: StopWords,
}

impl KeywordClassifier {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Classify one raw token. Returns the normalized keyword, or `None`
    /// when the token is empty after stripping, a stop word, or contains
    /// any non-letter character.
    pub fn classify(&self, token: &str) -> Option<String> {
        let stripped = strip_trailing_punctuation(token.trim());
        if stripped.is_empty() {
            return None;
        }
        let word = stripped.to_lowercase();
        if self.stop_words.contains(&word) {
            return None;
        }
        if !word.chars().all(char::is_alphabetic) {
            return None;
        }
        Some(word)
    }
}

/// Strip `. , ? : ; !` from the end of a token. The last remaining
/// character is never stripped, so a bare "!" survives here and gets
/// rejected by the letter check instead.
fn strip_trailing_punctuation(token: &str) -> &str {
    let mut word = token;
    loop {
        let mut chars = word.chars();
        let Some(last) = chars.next_back() else {
            break;
        };
        if !TRAILING_PUNCTUATION.contains(&last) || chars.next().is_none() {
            break;
        }
        word = &word[..word.len() - last.len_utf8()];
    }
    word
}
