use crate::summarize::frequency::{rank, score_sentences, word_frequencies};
use crate::summarize::keypoints::{extract_key_points, MAX_KEY_POINTS};
use crate::summarize::text::{layout_paragraphs, split_into_sentences};
use crate::summarize::SummaryResult;

/// The summary always carries at least this many sentences when available.
pub const MIN_SUMMARY_SENTENCES: usize = 10;

const SENTENCES_PER_PARAGRAPH: usize = 3;

/// Word-frequency extractive summarizer over the full document text.
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    /// Selects the top-scoring sentences in rank order, not document order.
    pub fn summarize_text(&self, text: &str, num_sentences: usize) -> SummaryResult {
        let sentences = split_into_sentences(text);
        if sentences.is_empty() {
            return SummaryResult::default();
        }
        let freq = word_frequencies(text);
        let top: Vec<&str> = rank(score_sentences(&sentences, &freq))
            .into_iter()
            .take(num_sentences.max(MIN_SUMMARY_SENTENCES))
            .map(|s| s.text)
            .collect();
        tracing::debug!(
            candidates = sentences.len(),
            selected = top.len(),
            "extractive selection"
        );

        let summary = layout_paragraphs(&top, SENTENCES_PER_PARAGRAPH);
        let key_points = extract_key_points(&summary, MAX_KEY_POINTS);
        SummaryResult {
            summary,
            key_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Twelve sentences; sentence `i` mentions "harvest" `i` times.
    fn twelve_sentences() -> Vec<String> {
        (0..12)
            .map(|i| {
                format!(
                    "Sentence number {} reports{} today.",
                    ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven"][i],
                    " harvest".repeat(i)
                )
            })
            .collect()
    }

    #[test]
    fn short_input_yields_empty_result() {
        let res = ExtractiveSummarizer.summarize_text("Short.", 5);
        assert_eq!(res, SummaryResult::default());
        assert!(res.summary.is_empty());
        assert!(res.key_points.is_empty());
    }

    #[test]
    fn selects_top_ten_in_rank_order_with_paragraph_breaks() {
        let sentences = twelve_sentences();
        let text = sentences.join(" ");
        let res = ExtractiveSummarizer.summarize_text(&text, 5);

        let expected: Vec<&str> = sentences.iter().rev().take(10).map(String::as_str).collect();
        assert_eq!(res.summary, layout_paragraphs(&expected, 3));
        assert_eq!(res.summary.matches("\n\n").count(), 3);
        assert!(!res.summary.contains("number zero"));
        assert!(!res.summary.contains("number one "));

        assert!(!res.key_points.is_empty());
        assert!(res.key_points.len() <= MAX_KEY_POINTS);
        for point in &res.key_points {
            assert!(res.summary.contains(point.as_str()));
        }
    }

    #[test]
    fn requested_count_is_only_a_floor() {
        let text = twelve_sentences().join(" ");
        let one = ExtractiveSummarizer.summarize_text(&text, 1);
        assert_eq!(split_into_sentences(&one.summary).len(), MIN_SUMMARY_SENTENCES);

        let all = ExtractiveSummarizer.summarize_text(&text, 12);
        assert_eq!(split_into_sentences(&all.summary).len(), 12);
    }

    #[test]
    fn ties_keep_document_order() {
        let text = "Alpha station reported calm weather. \
                    Bravo station reported calm weather.";
        let res = ExtractiveSummarizer.summarize_text(text, 1);
        assert!(res.summary.starts_with("Alpha station"));
    }
}
