//! Sentence splitting, word tokenization and paragraph layout.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentences of this many characters or fewer are treated as noise.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Tokens of this many characters or fewer are dropped.
const MIN_TOKEN_CHARS: usize = 2;

// ASCII classes only: U+00A0 is not a break and accented letters split words.
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?][ \t\n\x0B\x0C\r]+").expect("valid sentence regex"));

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid word regex"));

fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Splits `text` after every `.`, `!` or `?` that is followed by whitespace.
///
/// Pieces are trimmed and only those longer than [`MIN_SENTENCE_CHARS`]
/// characters are kept, in source order.
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        // terminal punctuation is a single byte, keep it with the sentence
        pieces.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(trim_control)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

/// Lower-cases `text` and splits it on runs of non-word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .split(&lowered)
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

/// Joins sentences with single spaces, starting a new paragraph (blank line)
/// after every `per_paragraph` sentences.
///
/// No space precedes a paragraph break: `"c.\n\nd."`, never `"c. \n\nd."`.
pub fn layout_paragraphs<S: AsRef<str>>(sentences: &[S], per_paragraph: usize) -> String {
    let per_paragraph = per_paragraph.max(1);
    let mut out = String::new();
    for (i, sentence) in sentences.iter().enumerate() {
        if i > 0 {
            out.push_str(if i % per_paragraph == 0 { "\n\n" } else { " " });
        }
        out.push_str(sentence.as_ref());
    }
    out
}
