use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::errors::SummarizeError;
use crate::summarize::chunker::{split_into_chunks, MAX_CHUNKS, MAX_CHUNK_CHARS};
use crate::summarize::keypoints::{extract_key_points, MAX_KEY_POINTS};
use crate::summarize::text::{layout_paragraphs, split_into_sentences};
use crate::summarize::{SummaryResult, Summarizer};

const MAX_PARAGRAPHS: usize = 3;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<SummaryOutput>),
    Single(SummaryOutput),
}

impl InferenceResponse {
    fn into_text(self) -> Option<String> {
        match self {
            InferenceResponse::Batch(items) => items.into_iter().next().map(|o| o.summary_text),
            InferenceResponse::Single(output) => Some(output.summary_text),
        }
    }
}

/// Delegates summarization to a hosted summarization model, one request per chunk.
pub struct HuggingFaceSummarizer {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl HuggingFaceSummarizer {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Result<Self, SummarizeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    fn summarize_chunk(&self, chunk: &str) -> Result<String, SummarizeError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&InferenceRequest { inputs: chunk })
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SummarizeError::Http(format!("status {status}")));
        }
        let body: InferenceResponse = resp
            .json()
            .map_err(|e| SummarizeError::Decode(format!("decode response: {e}")))?;
        body.into_text()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SummarizeError::Decode("no summary_text in response".into()))
    }
}

/// Keeps ASCII only and caps the length.
fn prepare_chunk(chunk: &str) -> String {
    chunk
        .chars()
        .filter(char::is_ascii)
        .take(MAX_CHUNK_CHARS)
        .collect()
}

/// Regroups joined chunk summaries into at most three paragraphs.
fn reflow(joined: &str) -> String {
    let sentences = split_into_sentences(joined);
    if sentences.is_empty() {
        return joined.trim().to_string();
    }
    let per_paragraph = sentences.len().div_ceil(MAX_PARAGRAPHS).max(2);
    layout_paragraphs(&sentences, per_paragraph)
}

impl Summarizer for HuggingFaceSummarizer {
    fn summarize(&self, text: &str, _num_sentences: usize) -> Result<SummaryResult, SummarizeError> {
        let chunks = split_into_chunks(text, MAX_CHUNK_CHARS, MAX_CHUNKS);
        let mut summaries = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            let payload = prepare_chunk(chunk);
            if payload.trim().is_empty() {
                tracing::debug!(chunk = idx, "skipping blank chunk");
                continue;
            }
            tracing::debug!(chunk = idx, chars = payload.len(), "submitting chunk");
            match self.summarize_chunk(&payload) {
                Ok(summary) => summaries.push(summary),
                Err(e) => tracing::warn!(chunk = idx, error = %e, "chunk summarization failed"),
            }
        }

        if summaries.is_empty() {
            return Err(SummarizeError::Exhausted {
                chunks: chunks.len(),
            });
        }
        tracing::info!(
            chunks = chunks.len(),
            summarized = summaries.len(),
            "remote summarization complete"
        );

        let summary = reflow(&summaries.join("\n\n"));
        let key_points = extract_key_points(&summary, MAX_KEY_POINTS);
        Ok(SummaryResult {
            summary,
            key_points,
        })
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}
