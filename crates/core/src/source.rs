use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Where transcripts come from.
///
/// The produced text is line-oriented; lines are optionally prefixed
/// `mm:ss - [Speaker] text` but no stricter format is mandated.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String>;
}

/// Stand-in transcript source.
///
/// Fetching real captions requires an authenticated server-side proxy,
/// which is out of scope here; this source serves a bundled sample
/// transcript after a simulated network delay instead.
pub struct SimulatedTranscriptSource {
    delay: Duration,
}

impl SimulatedTranscriptSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTranscriptSource {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl TranscriptSource for SimulatedTranscriptSource {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
        log::info!("fetching simulated transcript for video {video_id}");
        tokio::time::sleep(self.delay).await;
        Ok(SAMPLE_TRANSCRIPT.trim().to_string())
    }
}

const SAMPLE_TRANSCRIPT: &str = "
00:00 - [Host] Welcome back to the channel. Today we are walking through how modern build pipelines cache intermediate artifacts, and why most teams get the invalidation story wrong.
00:18 - [Host] Before we dive in, a quick refresher: a cache key has to capture every input that can change the output. Compiler version, flags, source files, even environment variables.
00:41 - [Guest] That last one surprises people. An env var nobody remembers setting can poison a week of builds.
00:55 - [Host] Exactly. So the first rule is: hash the full input set, not the parts that are convenient to hash.
01:12 - [Host] The second rule is about granularity. Cache at the level where hits are common but entries stay small. Whole-workspace caching sounds great until a one-line change misses everything.
01:36 - [Guest] Is that why per-crate caching won out in most of the ecosystems we looked at?
01:44 - [Host] It is. Per-module entries keep the blast radius of a change small, and the hit rate stays above ninety percent in the repos we measured.
02:05 - [Host] Third rule: never trust a cache you cannot rebuild from scratch. If deleting the cache directory changes your output, the cache was hiding a correctness bug.
02:29 - [Guest] We saw that one in production. A stale entry shipped a binary nobody could reproduce for two days.
02:47 - [Host] So to recap: hash every input, size your entries for the common change, and treat the cache as an optimization, never as a source of truth.
03:02 - [Host] Next week we cover remote execution. Thanks for watching.
";
