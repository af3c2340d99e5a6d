use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Result, TldwError};
use crate::provider::Provider;

const SUMMARY_PROMPT: &str = "You are an expert at summarizing video content. \
Provide a concise, easy-to-read summary of the video transcript supplied by the user. \
The summary must be well-structured markdown. Use bullet points for key topics.";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Produces a markdown summary from raw transcript text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

/// Summarizer backed by a hosted chat-completions API.
pub struct ChatSummarizer {
    provider: Provider,
    api_key: String,
    client: reqwest::Client,
}

impl ChatSummarizer {
    /// Reads the provider's API key from the environment; fails fast when
    /// it is absent.
    pub fn new(provider: Provider) -> Result<Self> {
        let api_key = provider.validate_api_key()?;
        Ok(Self {
            provider,
            api_key,
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        let config = self.provider.config();
        log::info!(
            "requesting summary from {} ({} transcript chars)",
            self.provider.name(),
            transcript.len()
        );

        let user_prompt = format!("Transcript:\n---\n{transcript}\n---\n\nSummary:");

        let response = self
            .client
            .post(config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": config.model,
                "messages": [
                    {
                        "role": "system",
                        "content": SUMMARY_PROMPT,
                    },
                    {
                        "role": "user",
                        "content": user_prompt,
                    },
                ],
                "temperature": 0.3,
            }))
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TldwError::SummaryFailed {
                reason: format!("API error ({status}): {body}"),
            });
        }

        let chat: ChatResponse = response.json().await?;
        chat.choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| TldwError::SummaryFailed {
                reason: "response contained no choices".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_response_deserializes_from_api_shape() {
        let raw = r###"{
            "choices": [
                { "message": { "role": "assistant", "content": "## Summary\n* point" } }
            ]
        }"###;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "## Summary\n* point");
    }

    #[test]
    fn empty_choices_deserialize_cleanly() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
