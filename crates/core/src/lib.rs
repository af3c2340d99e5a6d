//! tldw Core Library
//!
//! Core functionality for turning a YouTube link into an AI-generated
//! markdown summary with an editable, exportable transcript.

pub mod clipboard;
pub mod editor;
pub mod error;
pub mod history;
pub mod provider;
pub mod render;
pub mod session;
pub mod source;
pub mod summarize;
pub mod transcript;
pub mod types;
pub mod youtube;

// Re-export commonly used items at crate root
pub use clipboard::{COPIED_ACK_WINDOW, CopiedIndicator, copy_to_clipboard};
pub use editor::TranscriptEditor;
pub use error::{Result, TldwError};
pub use history::EditHistory;
pub use provider::{Provider, ProviderConfig};
pub use render::render_summary;
pub use session::{
    EMPTY_URL_ERROR, GENERIC_PIPELINE_ERROR, INVALID_URL_ERROR, SummarySession,
};
pub use source::{SimulatedTranscriptSource, TranscriptSource};
pub use summarize::{ChatSummarizer, Summarizer};
pub use transcript::parse_transcript;
pub use types::TranscriptLine;
pub use youtube::extract_video_id;
