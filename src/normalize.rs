//! Statement text normalization.
//!
//! Statements from every source go through the same reduction before they
//! land in the corpus: punctuation removal, lowercasing, tokenization and
//! stopword removal. The stopword set is injected so that callers (and
//! tests) can supply their own; [ENGLISH_STOPWORDS] is the shared default,
//! built once and immutable for the process lifetime.
use std::collections::HashSet;

use itertools::Itertools;
use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {

    /// English stopwords, matching the NLTK `english` list.
    pub static ref ENGLISH_STOPWORDS: HashSet<&'static str> = [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
        "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
        "yourselves", "he", "him", "his", "himself", "she", "she's", "her",
        "hers", "herself", "it", "it's", "its", "itself", "they", "them",
        "their", "theirs", "themselves", "what", "which", "who", "whom",
        "this", "that", "that'll", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "a", "an", "the", "and",
        "but", "if", "or", "because", "as", "until", "while", "of", "at",
        "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to",
        "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when",
        "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own",
        "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "don't", "should", "should've", "now", "d", "ll",
        "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
        "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't",
        "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
        "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't",
        "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
        "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
    ]
    .iter()
    .copied()
    .collect();
}

/// Statement normalizer with an injected stopword set.
pub struct Normalizer<'a> {
    stopwords: &'a HashSet<&'a str>,
}

impl<'a> Normalizer<'a> {
    /// Use a custom stopword set.
    pub fn new(stopwords: &'a HashSet<&'a str>) -> Self {
        Self { stopwords }
    }

    /// Normalize a raw statement.
    ///
    /// Removes every character that is not alphanumeric, underscore or
    /// whitespace, lowercases and trims, then tokenizes on unicode word
    /// boundaries and drops stopword tokens. Surviving tokens are rejoined
    /// with single spaces. Non-ASCII input is treated as opaque text.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
            .collect();
        let cleaned = cleaned.to_lowercase();

        cleaned
            .trim()
            .unicode_words()
            .filter(|word| !self.stopwords.contains(word))
            .join(" ")
    }
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Self {
            stopwords: &ENGLISH_STOPWORDS,
        }
    }
}
