//! Summarization client. Every LLM call in the service goes through the
//! `Summarizer` trait defined here; nothing else talks to the OpenAI API.
//!
//! One request per call: no streaming and no retries. A failed call surfaces
//! to the handler, which reports it to the client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for every summarization call (analytics and reports alike).
pub const MODEL: &str = "gpt-4o";
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM output does not match the expected schema: {0}")]
    SchemaMismatch(String),
}

#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    /// Ask the model for a single JSON object instead of free text.
    pub json_mode: bool,
}

/// Anything that can turn a prompt into generated text.
///
/// Carried in `AppState` as `Arc<dyn Summarizer>`.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError>;
}

/// Calls the summarizer in JSON mode and decodes the answer into `T`.
///
/// Decoding failures become `LlmError::SchemaMismatch`; callers apply any
/// semantic checks on the typed value afterwards.
pub async fn complete_json<T: DeserializeOwned>(
    summarizer: &dyn Summarizer,
    prompt: &str,
    system: &str,
) -> Result<T, LlmError> {
    let text = summarizer
        .complete(CompletionRequest {
            system,
            prompt,
            json_mode: true,
        })
        .await?;
    decode_json(&text)
}

/// Decodes model output as JSON, tolerating markdown code fences around it.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let text = strip_json_fences(text);
    serde_json::from_str(text).map_err(|e| LlmError::SchemaMismatch(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatBody>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormatBody {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the non-blank text of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl<'a> ChatRequest<'a> {
    fn new(request: &CompletionRequest<'a>) -> Self {
        Self {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: TEMPERATURE,
            response_format: request.json_mode.then_some(ResponseFormatBody {
                kind: "json_object",
            }),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP client
// ────────────────────────────────────────────────────────────────────────────

/// The production summarizer: OpenAI Chat Completions over HTTPS.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            api_url,
        })
    }
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        let body = ChatRequest::new(&request);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.text().map(str::to_string).ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_decode_json_reports_schema_mismatch() {
        #[derive(Debug, Deserialize)]
        struct Wanted {
            #[allow(dead_code)]
            summary: String,
        }
        let err = decode_json::<Wanted>("{\"other\": 1}").unwrap_err();
        assert!(matches!(err, LlmError::SchemaMismatch(_)));

        let err = decode_json::<Wanted>("not json at all").unwrap_err();
        assert!(matches!(err, LlmError::SchemaMismatch(_)));
    }

    #[test]
    fn test_json_request_sets_response_format() {
        let request = CompletionRequest {
            system: "sys",
            prompt: "hello",
            json_mode: true,
        };
        let value = serde_json::to_value(ChatRequest::new(&request)).unwrap();
        assert_eq!(value["model"], MODEL);
        assert_eq!(value["response_format"], json!({"type": "json_object"}));
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_text_request_omits_response_format() {
        let request = CompletionRequest {
            system: "sys",
            prompt: "hello",
            json_mode: false,
        };
        let value = serde_json::to_value(ChatRequest::new(&request)).unwrap();
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn test_response_text_skips_blank_content() {
        let blank: ChatResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": "  "}}]})).unwrap();
        assert!(blank.text().is_none());

        let ok: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": "relatório"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        }))
        .unwrap();
        assert_eq!(ok.text(), Some("relatório"));
    }
}
