use std::sync::LazyLock;

use regex::Regex;

use crate::types::TranscriptLine;

/// `mm:ss - [Speaker] text`, with the bracketed speaker optional.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}:\d{2})\s*-\s*(?:\[(.*?)\]\s*)?(.*)$").expect("hard-coded pattern compiles")
});

/// Parse raw transcript text into structured lines.
///
/// Splits on line breaks; lines that are blank after trimming are dropped
/// entirely. A line matching the timestamped shape yields its timestamp,
/// optional speaker, and remaining text; anything else becomes a plain
/// text line. Pure and deterministic.
pub fn parse_transcript(text: &str) -> Vec<TranscriptLine> {
    text.lines()
        .filter_map(|raw| {
            let line = raw.trim();
            if line.is_empty() {
                return None;
            }
            let parsed = match LINE_PATTERN.captures(line) {
                Some(caps) => TranscriptLine {
                    timestamp: caps.get(1).map(|m| m.as_str().to_string()),
                    speaker: caps
                        .get(2)
                        .map(|m| m.as_str().trim().to_string())
                        .filter(|speaker| !speaker.is_empty()),
                    text: caps.get(3).map_or_else(String::new, |m| m.as_str().to_string()),
                },
                None => TranscriptLine {
                    timestamp: None,
                    speaker: None,
                    text: line.to_string(),
                },
            };
            if parsed.text.trim().is_empty() {
                None
            } else {
                Some(parsed)
            }
        })
        .collect()
}
