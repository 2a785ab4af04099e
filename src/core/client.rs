//! Generation API client.
//!
//! [`RecipeClient`] is the seam the command handler calls through; [`GeminiClient`]
//! is the production implementation speaking Gemini's `generateContent` REST API.
//! Every failure, whatever its source, comes back as [`Error::Generation`] so the
//! handler only ever has to branch on success or failure.

use crate::config::GenerationConfig;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// One outbound text-generation call.
#[async_trait]
pub trait RecipeClient: Send + Sync {
    /// Sends `prompt` to the model described by `config` and returns its text.
    ///
    /// # Errors
    /// Returns [`Error::Generation`] carrying the stringified cause of any failure.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: SamplingConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SamplingConfig {
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Wraps `{"error": {...}}` bodies returned alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

fn request_body<'a>(prompt: &'a str, config: &GenerationConfig) -> GenerateContentRequest<'a> {
    let tools = if config.google_search {
        vec![Tool {
            google_search: GoogleSearch {},
        }]
    } else {
        Vec::new()
    };

    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![TextPart { text: prompt }],
        }],
        generation_config: SamplingConfig {
            temperature: config.temperature,
        },
        tools,
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(Error::generation(format!("Gemini error: {}", error.message)));
    }

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(Error::generation(format!("Prompt was blocked: {reason}")));
    }

    let Some(candidate) = response.candidates.and_then(|c| c.into_iter().next()) else {
        return Err(Error::generation("Gemini returned no candidates"));
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(Error::generation(format!(
            "Gemini returned no text (finish reason: {reason})"
        )));
    }

    Ok(text)
}

/// Production client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client authenticating with `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
        }
    }

    async fn call(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        let response = self
            .http
            .post(config.generate_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body(prompt, config))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.text().await {
                Ok(body) => serde_json::from_str::<ErrorEnvelope>(&body)
                    .map_or(body, |envelope| envelope.error.message),
                Err(e) => format!("failed to read error body: {e}"),
            };
            return Err(Error::generation(format!(
                "Gemini API error: {status} - {detail}"
            )));
        }

        let api_response: GenerateContentResponse = response.json().await?;
        extract_text(api_response)
    }
}

#[async_trait]
impl RecipeClient for GeminiClient {
    #[instrument(skip(self, prompt, config), fields(model = %config.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        match self.call(prompt, config).await {
            Ok(text) => {
                debug!(chars = text.chars().count(), "Gemini returned recipe text");
                Ok(text)
            }
            Err(Error::Generation { message }) => {
                warn!("Generation failed: {message}");
                Err(Error::Generation { message })
            }
            Err(other) => {
                warn!("Generation failed: {other}");
                Err(Error::generation(other))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
    };
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        body: Arc<Mutex<Option<Value>>>,
        api_key: Arc<Mutex<Option<String>>>,
    }

    /// Serves a canned response on a random local port and records what it receives.
    async fn stub_server(status: StatusCode, reply: Value) -> (GenerationConfig, Captured) {
        let captured = Captured::default();
        let app = Router::new()
            .route(
                "/v1beta/models/{model}",
                post(
                    move |State(captured): State<Captured>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            *captured.body.lock().unwrap() = Some(body);
                            *captured.api_key.lock().unwrap() = headers
                                .get(API_KEY_HEADER)
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = GenerationConfig {
            endpoint: format!("http://{addr}/v1beta"),
            ..GenerationConfig::default()
        };
        (config, captured)
    }

    #[test]
    fn test_request_body_with_search_tool() {
        let config = GenerationConfig::default();
        let body = serde_json::to_value(request_body("make dinner", &config)).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "make dinner");
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(body["tools"], json!([{ "google_search": {} }]));
    }

    #[test]
    fn test_request_body_without_search_tool_omits_tools() {
        let config = GenerationConfig {
            google_search: false,
            ..GenerationConfig::default()
        };
        let body = serde_json::to_value(request_body("make dinner", &config)).unwrap();
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "# Teriyaki" }, { "text": " Chicken" }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "# Teriyaki Chicken");
    }

    #[test]
    fn test_extract_text_reports_block_reason() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, Error::Generation { .. }));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_extract_text_rejects_empty_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "MAX_TOKENS" }]
        }))
        .unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[tokio::test]
    async fn test_generate_against_stub_server() {
        let (config, captured) = stub_server(
            StatusCode::OK,
            json!({
                "candidates": [{ "content": { "parts": [{ "text": "# Teriyaki Chicken" }] } }]
            }),
        )
        .await;

        let client = GeminiClient::new("test-key");
        let text = client.generate("prompt text", &config).await.unwrap();
        assert_eq!(text, "# Teriyaki Chicken");

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt text");
        assert_eq!(
            captured.api_key.lock().unwrap().as_deref(),
            Some("test-key")
        );
    }

    #[tokio::test]
    async fn test_quota_error_becomes_generation_failure() {
        let (config, _) = stub_server(
            StatusCode::TOO_MANY_REQUESTS,
            json!({ "error": { "code": 429, "message": "quota exceeded" } }),
        )
        .await;

        let client = GeminiClient::new("test-key");
        let err = client.generate("prompt", &config).await.unwrap_err();
        assert!(matches!(err, Error::Generation { .. }));
        assert!(err.to_string().contains("quota exceeded"));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_unreadable_error_body_is_reported() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Answers 500 with a body shorter than its Content-Length, then hangs up.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0_u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\n\
                      Content-Type: application/json\r\n\
                      Content-Length: 100\r\n\r\n{\"error\"",
                )
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let config = GenerationConfig {
            endpoint: format!("http://{addr}/v1beta"),
            ..GenerationConfig::default()
        };
        let err = GeminiClient::new("key")
            .generate("prompt", &config)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::Generation { .. }));
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("failed to read error body"), "{message}");
    }

    #[tokio::test]
    async fn test_transport_error_becomes_generation_failure() {
        // Bind then drop a listener so the port is very likely closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = GenerationConfig {
            endpoint: format!("http://{addr}/v1beta"),
            ..GenerationConfig::default()
        };
        let err = GeminiClient::new("key")
            .generate("prompt", &config)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Generation { .. }));
    }
}
