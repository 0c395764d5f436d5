use std::io::{Read, Write};

use anyhow::Context;

mod config;
mod errors;
mod logging;
mod summarize;

use crate::config::AppConfig;
use crate::summarize::build_summarizer;

fn read_input(cfg: &AppConfig) -> anyhow::Result<String> {
    match &cfg.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read input from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    if let Err(e) = cfg.validate() {
        tracing::warn!(config_error=%e, "invalid config");
    }

    let summarizer = build_summarizer(
        cfg.api_key().map(str::to_owned),
        cfg.endpoint.clone(),
        cfg.timeout(),
    );

    let text = read_input(&cfg)?;
    tracing::info!(
        remote_enabled = summarizer.remote_enabled(),
        input_chars = text.chars().count(),
        sentences = cfg.sentences,
        "summarizing document"
    );
    let result = summarizer.summarize(&text, cfg.sentences);

    let json = if cfg.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("write result")?;
    Ok(())
}
