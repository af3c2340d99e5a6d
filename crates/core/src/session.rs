use crate::editor::TranscriptEditor;
use crate::error::Result;
use crate::source::TranscriptSource;
use crate::summarize::Summarizer;
use crate::youtube::extract_video_id;

/// Shown inline when the URL field is empty; the pipeline never starts.
pub const EMPTY_URL_ERROR: &str = "Please enter a YouTube URL.";

/// Shown inline when no video id can be extracted; the pipeline never
/// starts.
pub const INVALID_URL_ERROR: &str = "Invalid YouTube URL. Please check the format.";

/// The single user-facing message for any pipeline-stage failure. The
/// underlying cause is logged, never shown.
pub const GENERIC_PIPELINE_ERROR: &str = "Failed to generate summary. Please try again.";

/// Drives the submit → fetch → summarize pipeline and owns the resulting
/// view state: loading flag, inline error, summary text, and the
/// transcript editor. At most one pipeline runs at a time.
pub struct SummarySession {
    source: Box<dyn TranscriptSource>,
    summarizer: Box<dyn Summarizer>,
    loading: bool,
    error: Option<String>,
    summary: Option<String>,
    editor: Option<TranscriptEditor>,
}

impl SummarySession {
    pub fn new(source: Box<dyn TranscriptSource>, summarizer: Box<dyn Summarizer>) -> Self {
        Self {
            source,
            summarizer,
            loading: false,
            error: None,
            summary: None,
            editor: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn editor(&self) -> Option<&TranscriptEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut TranscriptEditor> {
        self.editor.as_mut()
    }

    /// Run the full pipeline for a pasted URL.
    ///
    /// Validation failures set an inline error without touching the
    /// current summary or editor. Once the pipeline starts, the prior
    /// summary and editor are cleared and stay cleared on failure — no
    /// stale partial state survives. Any stage failure collapses to
    /// [`GENERIC_PIPELINE_ERROR`]; the cause is logged. The loading flag
    /// is cleared on every exit path. No retries: the user resubmits.
    pub async fn summarize_url(&mut self, url: &str) {
        if self.loading {
            // The trigger control is disabled while loading; a second
            // submission that arrives anyway is dropped, not raced.
            log::warn!("summarize requested while a pipeline is in flight; ignoring");
            return;
        }

        self.error = None;

        if url.trim().is_empty() {
            self.error = Some(EMPTY_URL_ERROR.to_string());
            return;
        }
        let Some(video_id) = extract_video_id(url) else {
            self.error = Some(INVALID_URL_ERROR.to_string());
            return;
        };

        self.loading = true;
        self.summary = None;
        self.editor = None;

        match self.run_pipeline(&video_id).await {
            Ok((transcript, summary)) => {
                self.editor = Some(TranscriptEditor::new(transcript));
                self.summary = Some(summary);
            }
            Err(cause) => {
                log::error!("summary pipeline failed for video {video_id}: {cause}");
                self.error = Some(GENERIC_PIPELINE_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    async fn run_pipeline(&self, video_id: &str) -> Result<(String, String)> {
        let transcript = self.source.fetch_transcript(video_id).await?;
        let summary = self.summarizer.summarize(&transcript).await?;
        Ok((transcript, summary))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::TldwError;

    struct FixedSource {
        transcript: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TranscriptSource for FixedSource {
        async fn fetch_transcript(&self, _video_id: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.transcript.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TranscriptSource for FailingSource {
        async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
            Err(TldwError::TranscriptFailed {
                video_id: video_id.to_string(),
                reason: "proxy unreachable".to_string(),
            })
        }
    }

    struct FixedSummarizer(&'static str);

    #[async_trait]
    impl Summarizer for FixedSummarizer {
        async fn summarize(&self, _transcript: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _transcript: &str) -> Result<String> {
            Err(TldwError::SummaryFailed {
                reason: "service unavailable".to_string(),
            })
        }
    }

    fn session_with(
        source: impl TranscriptSource + 'static,
        summarizer: impl Summarizer + 'static,
    ) -> SummarySession {
        SummarySession::new(Box::new(source), Box::new(summarizer))
    }

    const URL: &str = "https://youtu.be/abc123";

    #[tokio::test]
    async fn success_sets_summary_and_editor_and_clears_loading() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session_with(
            FixedSource {
                transcript: "00:01 - [Host] hello",
                calls: calls.clone(),
            },
            FixedSummarizer("## Summary\n* hello"),
        );

        session.summarize_url(URL).await;

        assert_eq!(session.summary(), Some("## Summary\n* hello"));
        assert_eq!(session.editor().unwrap().text(), "00:01 - [Host] hello");
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_url_fails_inline_without_starting_the_pipeline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session_with(
            FixedSource {
                transcript: "irrelevant",
                calls: calls.clone(),
            },
            FixedSummarizer("irrelevant"),
        );

        session.summarize_url("   ").await;

        assert_eq!(session.error(), Some(EMPTY_URL_ERROR));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn invalid_url_fails_inline_without_starting_the_pipeline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session_with(
            FixedSource {
                transcript: "irrelevant",
                calls: calls.clone(),
            },
            FixedSummarizer("irrelevant"),
        );

        session.summarize_url("https://example.com/watch?v=nope").await;

        assert_eq!(session.error(), Some(INVALID_URL_ERROR));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_only_the_generic_error() {
        let mut session = session_with(FailingSource, FixedSummarizer("unused"));

        session.summarize_url(URL).await;

        assert_eq!(session.error(), Some(GENERIC_PIPELINE_ERROR));
        assert_eq!(session.summary(), None);
        assert!(session.editor().is_none());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn summarize_failure_leaves_no_partial_transcript_state() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session_with(
            FixedSource {
                transcript: "00:01 - [Host] hello",
                calls,
            },
            FailingSummarizer,
        );

        session.summarize_url(URL).await;

        assert_eq!(session.error(), Some(GENERIC_PIPELINE_ERROR));
        assert_eq!(session.summary(), None);
        assert!(session.editor().is_none());
    }

    #[tokio::test]
    async fn resubmission_replaces_the_editor_and_its_history() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session_with(
            FixedSource {
                transcript: "00:01 - [Host] first run",
                calls: calls.clone(),
            },
            FixedSummarizer("summary"),
        );

        session.summarize_url(URL).await;
        {
            let editor = session.editor_mut().unwrap();
            editor.begin_edit();
            editor.input("edited text");
            editor.save();
            assert!(editor.can_undo());
        }

        session.summarize_url(URL).await;
        let editor = session.editor().unwrap();
        assert_eq!(editor.text(), "00:01 - [Host] first run");
        assert!(!editor.can_undo());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_run_clears_results_from_a_prior_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut session = session_with(
            FixedSource {
                transcript: "00:01 - [Host] hello",
                calls,
            },
            FixedSummarizer("summary"),
        );
        session.summarize_url(URL).await;
        assert!(session.summary().is_some());

        // Swap in failing collaborators for the second attempt.
        session.source = Box::new(FailingSource);
        session.summarize_url(URL).await;

        assert_eq!(session.summary(), None);
        assert!(session.editor().is_none());
        assert_eq!(session.error(), Some(GENERIC_PIPELINE_ERROR));
    }
}
