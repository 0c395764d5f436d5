use super::frequency::{rank, score_sentences, word_frequencies};
use super::text::split_into_sentences;

pub const MAX_KEY_POINTS: usize = 7;

const MIN_KEY_POINT_CHARS: usize = 20;
const MAX_KEY_POINT_CHARS: usize = 200;

/// Picks the most salient sentences of an already produced summary.
///
/// Sentences are scored against the summary's own word frequencies, ranked,
/// and kept when strictly between 20 and 200 characters long. The result is
/// free of duplicates and holds at most `max_key_points` entries.
pub fn extract_key_points(summary: &str, max_key_points: usize) -> Vec<String> {
    let sentences = split_into_sentences(summary);
    let freq = word_frequencies(summary);
    let mut points: Vec<String> = Vec::new();
    for scored in rank(score_sentences(&sentences, &freq)) {
        if points.len() == max_key_points {
            break;
        }
        let len = scored.text.chars().count();
        if len <= MIN_KEY_POINT_CHARS || len >= MAX_KEY_POINT_CHARS {
            continue;
        }
        if points.iter().any(|p| p == scored.text) {
            continue;
        }
        points.push(scored.text.to_string());
    }
    points
}
