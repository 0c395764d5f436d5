use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::text::tokenize;

pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "is", "in", "at", "of", "on", "and", "a", "to", "it", "for", "with", "as", "was",
        "were", "by", "an", "be", "this", "that", "from", "or", "are", "but", "not", "have", "has",
        "had", "they", "you", "we", "he", "she", "his", "her", "their", "our", "its", "which",
        "will", "would", "can", "could", "should", "may", "might", "do", "does", "did", "so", "if",
        "then", "than", "about", "into", "more", "other", "some", "any", "all", "no", "out", "up",
        "down", "over", "under", "again", "further", "once",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

pub type FrequencyTable = HashMap<String, usize>;

/// Counts every non-stopword token of `text`.
pub fn word_frequencies(text: &str) -> FrequencyTable {
    let mut freq = FrequencyTable::new();
    for word in tokenize(text) {
        if !is_stopword(&word) {
            *freq.entry(word).or_insert(0) += 1;
        }
    }
    freq
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub score: f64,
}

/// Scores each distinct sentence by the summed table counts of its
/// non-stopword tokens. Output keeps first-occurrence order; repeated
/// sentences collapse into their first entry.
pub fn score_sentences<'a>(sentences: &[&'a str], freq: &FrequencyTable) -> Vec<ScoredSentence<'a>> {
    let mut seen = HashSet::new();
    sentences
        .iter()
        .filter(|s| seen.insert(**s))
        .map(|&text| {
            let score = tokenize(text)
                .iter()
                .filter(|w| !is_stopword(w))
                .map(|w| freq.get(w).copied().unwrap_or(0) as f64)
                .sum();
            ScoredSentence { text, score }
        })
        .collect()
}

/// Highest score first; equal scores keep their relative order.
pub fn rank(mut scored: Vec<ScoredSentence<'_>>) -> Vec<ScoredSentence<'_>> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
