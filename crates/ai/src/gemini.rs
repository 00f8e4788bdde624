//! Google Gemini `generateContent` client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::generator::TextGenerator;
use crate::result::AiError;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// [`TextGenerator`] backed by the Gemini REST API.
///
/// Context and prompt are sent as two text parts of a single user turn.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &AdvisorConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Transport(format!("failed to build http client: {e}")))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, context: &str, prompt: &str) -> Result<String, AiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::Unavailable("no Gemini API key configured".to_string()))?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: context }, RequestPart { text: prompt }],
            }],
        };

        debug!(endpoint = %self.endpoint, "sending generateContent request");

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AiError::InferenceFailed(format!(
                "gemini returned {status}: {detail}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.text().ok_or(AiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str = "/v1beta/models/gemini-test:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        let config = AdvisorConfig::default()
            .with_api_key("test-key")
            .with_model("gemini-test")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_secs(5));
        GeminiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn returns_text_of_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "ctx" }, { "text": "question" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "Reorder " }, { "text": "SKU-1." }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).generate("ctx", "question").await.unwrap();
        assert_eq!(text, "Reorder SKU-1.");
    }

    #[tokio::test]
    async fn http_error_is_inference_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key invalid"))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("ctx", "q").await.unwrap_err();
        match err {
            AiError::InferenceFailed(msg) => assert!(msg.contains("403")),
            other => panic!("Expected InferenceFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("ctx", "q").await.unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn missing_api_key_short_circuits() {
        let config = AdvisorConfig::default().with_base_url("http://127.0.0.1:9");
        let client = GeminiClient::new(&config).unwrap();

        let err = client.generate("ctx", "q").await.unwrap_err();
        assert!(matches!(err, AiError::Unavailable(_)));
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let config = AdvisorConfig::default()
            .with_base_url("https://example.test/")
            .with_model("m1");
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/m1:generateContent"
        );
    }
}
