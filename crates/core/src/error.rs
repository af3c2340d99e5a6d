use thiserror::Error;

#[derive(Error, Debug)]
pub enum TldwError {
    #[error("Transcript fetch failed for {video_id}: {reason}")]
    TranscriptFailed { video_id: String, reason: String },

    #[error("Summarization failed: {reason}")]
    SummaryFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Clipboard error: {0}")]
    ClipboardError(#[from] arboard::Error),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, TldwError>;
