use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

#[derive(Debug, Clone, Parser)]
#[command(name = "content-summarizer")]
#[command(about = "Summarize plain document text into a digest and key points", long_about = None)]
pub struct AppConfig {
    /// Plain-text file to summarize; reads stdin when omitted
    pub input: Option<PathBuf>,

    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "SUMMARY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, env = "SUMMARY_SENTENCES", default_value_t = 5)]
    pub sentences: usize,

    #[arg(long, env = "SUMMARY_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    #[arg(long)]
    pub pretty: bool,
}

impl AppConfig {
    pub fn from_env_and_args() -> Self {
        Self::parse()
    }

    /// The remote credential, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be > 0".into());
        }
        if self.timeout_secs > 300 {
            return Err("timeout_secs too large (max 300)".into());
        }
        let url = url::Url::parse(&self.endpoint)
            .map_err(|_| "Invalid SUMMARY_ENDPOINT URL format".to_string())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err("SUMMARY_ENDPOINT must use http or https".into());
        }
        Ok(())
    }
}
