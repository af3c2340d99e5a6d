use std::sync::LazyLock;

use regex::Regex;

/// Ordered URL shapes a video id can be extracted from; the first pattern
/// that matches wins. Covers the standard watch URL, the short youtu.be
/// form, embed URLs, and the legacy /v/ form.
static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"https?://(?:www\.)?youtube\.com/watch\?v=([a-zA-Z0-9_-]+)",
        r"https?://youtu\.be/([a-zA-Z0-9_-]+)",
        r"https?://(?:www\.)?youtube\.com/embed/([a-zA-Z0-9_-]+)",
        r"https?://(?:www\.)?youtube\.com/v/([a-zA-Z0-9_-]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("hard-coded pattern compiles"))
    .collect()
});

/// Extract the YouTube video id from a URL.
///
/// Total function: absence of a match is a valid outcome, not an error.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}
