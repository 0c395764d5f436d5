use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("http error: {0}")]
    Http(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("no usable output from {chunks} chunk(s)")]
    Exhausted { chunks: usize },
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            SummarizeError::Decode(error.to_string())
        } else {
            SummarizeError::Http(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SummarizeError::Http("status 503".into()).to_string(),
            "http error: status 503"
        );
        assert_eq!(
            SummarizeError::Exhausted { chunks: 3 }.to_string(),
            "no usable output from 3 chunk(s)"
        );
    }
}
