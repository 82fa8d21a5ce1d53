//! Gemini-backed gradient generator (API key based)
//!
//! Sends the mood prompt to Google's Generative Language API with a
//! structured-output schema and returns the JSON text of the first
//! candidate. No retries and no client timeout: a request runs until the
//! service answers or the connection fails.

use async_trait::async_trait;
use chromaflow_core::{gradient_schema, mood_prompt, AiGenerationError, GradientGenerator};
use reqwest::Client;
use serde_json::{json, Value};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, AiGenerationError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AiGenerationError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.into().trim().to_string(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Point the generator at a different API host (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Google API keys start with "AIza". Format check only.
    pub fn is_valid_api_key_format(key: &str) -> bool {
        let trimmed = key.trim();
        !trimmed.is_empty() && trimmed.starts_with("AIza")
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(&self, mood: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": mood_prompt(mood) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": gradient_schema(),
                "thinkingConfig": { "thinkingBudget": 0 }
            }
        })
    }
}

/// Text of the first candidate, joined across all of its parts
fn candidate_text(json: &Value) -> Option<String> {
    let parts = json["candidates"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|c| c["content"]["parts"].as_array())?;

    let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.concat())
    }
}

#[async_trait]
impl GradientGenerator for GeminiGenerator {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn generate_raw(&self, prompt: &str) -> Result<String, AiGenerationError> {
        if !Self::is_valid_api_key_format(&self.api_key) {
            log::warn!("Gemini API key does not look like a Google key");
        }

        log::debug!("POST {} (model {})", self.endpoint(), self.model);
        let resp = self
            .client
            .post(self.endpoint())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| AiGenerationError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AiGenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| AiGenerationError::Transport(e.to_string()))?;

        candidate_text(&json).ok_or(AiGenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaflow_core::{generate_gradient, GradientType};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "AIzaTestApiKey";
    const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn generator(server: &MockServer) -> GeminiGenerator {
        GeminiGenerator::new(KEY, DEFAULT_MODEL)
            .unwrap()
            .with_base_url(server.uri())
    }

    fn candidate(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn test_api_key_format() {
        assert!(GeminiGenerator::is_valid_api_key_format("AIzaSyD_abcdef"));
        assert!(!GeminiGenerator::is_valid_api_key_format(""));
        assert!(!GeminiGenerator::is_valid_api_key_format("sk-openai-key"));
    }

    #[test]
    fn test_request_body_asks_for_json_schema() {
        let generator = GeminiGenerator::new(KEY, DEFAULT_MODEL).unwrap();
        let body = generator.request_body("ocean sunset");

        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
        assert_eq!(body["generationConfig"]["responseSchema"], gradient_schema());
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"ocean sunset\""));
    }

    #[test]
    fn test_candidate_text_missing() {
        assert_eq!(candidate_text(&json!({})), None);
        assert_eq!(candidate_text(&json!({ "candidates": [] })), None);
        let no_text = json!({ "candidates": [{ "content": { "parts": [{ "inlineData": {} }] } }] });
        assert_eq!(candidate_text(&no_text), None);
    }

    #[test]
    fn test_candidate_text_joins_parts() {
        let json = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "{\"gradientName\": " },
                        { "text": "\"Split\"}" }
                    ]
                }
            }]
        });
        assert_eq!(candidate_text(&json).as_deref(), Some(r#"{"gradientName": "Split"}"#));
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;
        let payload = r##"{"gradientName": "Lagoon", "type": "radial", "angle": 0,
            "stops": [{"color": "#00c9ff", "offset": 0}, {"color": "#92fe9d", "offset": 100}]}"##;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", KEY))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate(payload)))
            .expect(1)
            .mount(&server)
            .await;

        let generator = generator(&server);
        let generated = generate_gradient(&generator, "tropical water").await.unwrap();
        assert_eq!(generated.name, "Lagoon");
        assert_eq!(generated.config.gradient_type, GradientType::Radial);
        assert_eq!(generated.config.angle, 0.0);
    }

    #[tokio::test]
    async fn test_api_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = generator(&server).generate_raw("anything").await.unwrap_err();
        match err {
            AiGenerationError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_candidate_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = generator(&server).generate_raw("anything").await.unwrap_err();
        assert!(matches!(err, AiGenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let generator = GeminiGenerator::new(KEY, DEFAULT_MODEL)
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let err = generator.generate_raw("anything").await.unwrap_err();
        assert!(matches!(err, AiGenerationError::Transport(_)));
    }
}
