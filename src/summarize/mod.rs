use std::time::Duration;

use serde::Serialize;

use crate::errors::SummarizeError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub key_points: Vec<String>,
}

pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, num_sentences: usize) -> Result<SummaryResult, SummarizeError>;

    fn name(&self) -> &'static str;
}

mod chunker;
mod extractive;
mod frequency;
mod huggingface;
mod keypoints;
mod text;

use extractive::ExtractiveSummarizer;
use huggingface::HuggingFaceSummarizer;

/// Tries the remote backend when one is configured and falls back to the
/// local extractive summarizer on any failure. Never fails itself.
pub struct FallbackSummarizer {
    remote: Option<Box<dyn Summarizer>>,
    local: ExtractiveSummarizer,
}

impl FallbackSummarizer {
    pub fn local_only() -> Self {
        Self {
            remote: None,
            local: ExtractiveSummarizer,
        }
    }

    pub fn summarize(&self, text: &str, num_sentences: usize) -> SummaryResult {
        if let Some(remote) = &self.remote {
            match remote.summarize(text, num_sentences) {
                Ok(result) => {
                    tracing::info!(backend = remote.name(), "summary produced");
                    return result;
                }
                Err(e) => {
                    tracing::warn!(
                        backend = remote.name(),
                        error = %e,
                        "remote summarization failed, falling back to local summarizer"
                    );
                }
            }
        }
        let result = self.local.summarize_text(text, num_sentences);
        tracing::info!(backend = "extractive", "summary produced");
        result
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }
}

/// Builds the summarizer chain. The remote backend is only wired in when a
/// credential is present; without one every call runs locally.
pub fn build_summarizer(
    api_key: Option<String>,
    endpoint: String,
    timeout: Duration,
) -> FallbackSummarizer {
    let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) else {
        return FallbackSummarizer::local_only();
    };
    match HuggingFaceSummarizer::new(endpoint, api_key, timeout) {
        Ok(remote) => FallbackSummarizer {
            remote: Some(Box::new(remote)),
            local: ExtractiveSummarizer,
        },
        Err(e) => {
            tracing::warn!(error = %e, "remote summarizer could not be built, using local only");
            FallbackSummarizer::local_only()
        }
    }
}
