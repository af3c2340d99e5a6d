use serde::{Deserialize, Serialize};

/// One displayable transcript line.
///
/// Derived from the raw transcript text on every content change; never
/// mutated directly. `text` is non-empty after trimming — lines that would
/// violate this are dropped by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub timestamp: Option<String>,
    pub speaker: Option<String>,
    pub text: String,
}
