//! Streaming chat client for OpenAI-compatible endpoints.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::json;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::AiError;
use crate::types::ChatMessage;

/// Default timeout for the initial connection; the body then streams.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A stream of text deltas from the model.
pub type TextStream = BoxStream<'static, Result<String, AiError>>;

/// Trait for LLM chat clients: history plus system prompt in, streamed
/// text out. The narrator is the only caller.
#[async_trait]
pub trait LlmClientTrait: Send + Sync {
    async fn stream_chat(&self, messages: Vec<ChatMessage>) -> Result<TextStream, AiError>;
}

/// Configuration for an OpenAI-compatible chat endpoint.
#[derive(Debug, Clone)]
pub struct LlmClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Chat client speaking the OpenAI-compatible chat-completions wire shape
/// with server-sent-event streaming.
pub struct OpenAiCompatibleClient {
    client: Client,
    config: LlmClientConfig,
}

impl OpenAiCompatibleClient {
    pub fn new(config: LlmClientConfig) -> Result<Self, AiError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| AiError::InvalidInput(format!("invalid API key: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| AiError::provider(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmClientTrait for OpenAiCompatibleClient {
    async fn stream_chat(&self, messages: Vec<ChatMessage>) -> Result<TextStream, AiError> {
        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "stream": true,
        });

        debug!("POST {} model {}", self.endpoint(), self.config.model);
        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AiError::provider(format!(
                "chat endpoint returned status {}",
                response.status()
            )));
        }

        let (tx, rx) = mpsc::channel::<Result<String, AiError>>(32);
        tokio::spawn(async move {
            let mut bytes = response.bytes_stream();
            let mut buffer = String::new();
            while let Some(chunk) = bytes.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        let _ = tx.send(Err(AiError::provider(e.to_string()))).await;
                        return;
                    }
                };
                buffer.push_str(&String::from_utf8_lossy(&chunk));
                // SSE events are newline-delimited; keep the trailing
                // partial line in the buffer until the next chunk.
                while let Some(idx) = buffer.find('\n') {
                    let line: String = buffer.drain(..=idx).collect();
                    match parse_sse_line(line.trim()) {
                        Some(SseEvent::Delta(text)) => {
                            if tx.send(Ok(text)).await.is_err() {
                                return;
                            }
                        }
                        Some(SseEvent::Done) => return,
                        None => {}
                    }
                }
            }
        });

        Ok(Box::pin(ReceiverStream::new(rx)))
    }
}

enum SseEvent {
    Delta(String),
    Done,
}

/// Parses one server-sent-event line from a chat-completions stream.
/// Returns `None` for blank lines, comments, and deltas with no content.
fn parse_sse_line(line: &str) -> Option<SseEvent> {
    let data = line.strip_prefix("data:")?.trim();
    if data == "[DONE]" {
        return Some(SseEvent::Done);
    }
    let value: serde_json::Value = serde_json::from_str(data).ok()?;
    let delta = value
        .get("choices")?
        .get(0)?
        .get("delta")?
        .get("content")?
        .as_str()?;
    if delta.is_empty() {
        return None;
    }
    Some(SseEvent::Delta(delta.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sse_delta_lines_yield_text() {
        let line = r#"data: {"choices":[{"delta":{"content":"The deal"}}]}"#;
        match parse_sse_line(line) {
            Some(SseEvent::Delta(text)) => assert_eq!(text, "The deal"),
            _ => panic!("expected a delta"),
        }
    }

    #[test]
    fn sse_done_marker_terminates() {
        assert!(matches!(parse_sse_line("data: [DONE]"), Some(SseEvent::Done)));
    }

    #[test]
    fn sse_noise_is_ignored() {
        assert!(parse_sse_line("").is_none());
        assert!(parse_sse_line(": keep-alive").is_none());
        assert!(parse_sse_line(r#"data: {"choices":[{"delta":{}}]}"#).is_none());
        assert!(parse_sse_line(r#"data: {"choices":[{"delta":{"content":""}}]}"#).is_none());
        assert!(parse_sse_line("data: not json").is_none());
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        let client = OpenAiCompatibleClient::new(LlmClientConfig {
            base_url: "https://llm.example.com/v1/".to_string(),
            ..LlmClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.endpoint(), "https://llm.example.com/v1/chat/completions");
    }
}
