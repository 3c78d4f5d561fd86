use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ayurvedic_analysis::ports::LLMClient,
    common::{LLMConfig, entities::app_errors::CoreError},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();

        (!text.trim().is_empty()).then_some(text)
    }
}

/// Extra time granted to the HTTP client beyond the service deadline, so a
/// slow call is always reported as a timeout by the service.
const TRANSPORT_TIMEOUT_GRACE: Duration = Duration::from_secs(5);

fn transport_timeout(config: &LLMConfig) -> Duration {
    config.timeout + TRANSPORT_TIMEOUT_GRACE
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(transport_timeout(config))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Gemini HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::UpstreamUnavailable(format!("LLM request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamUnavailable(format!(
                "LLM API returned {status}"
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::UpstreamUnavailable(format!("Malformed LLM response envelope: {}", e))
        })?;

        gemini_response
            .into_text()
            .ok_or_else(|| CoreError::UpstreamUnavailable("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(base_url: &str) -> LLMConfig {
        LLMConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_base_url: base_url.to_string(),
            timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn test_endpoint_uses_model_and_base_url() {
        let client = GeminiLLMClient::new(&config("http://localhost:9000/v1beta/")).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_transport_outlasts_service_deadline() {
        let config = config("http://localhost:9000");
        assert!(transport_timeout(&config) > config.timeout);
    }

    #[test]
    fn test_request_body_shape() {
        let request = GeminiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: "system".to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: "prompt".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({ "type": "object" }),
            }),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["system_instruction"]["parts"][0]["text"], "system");
        assert!(body["system_instruction"].get("role").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["generation_config"]["response_mime_type"],
            "application/json"
        );
    }

    #[test]
    fn test_response_text_is_joined() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } }]
        }))
        .unwrap();
        assert_eq!(response.into_text().as_deref(), Some("{\"a\":1}"));

        let empty: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(empty.into_text().is_none());

        let blocked: GeminiResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
        assert!(blocked.into_text().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_upstream_unavailable() {
        let client = GeminiLLMClient::new(&config("http://127.0.0.1:1")).unwrap();
        let err = client
            .generate_with_text("s".to_string(), "p".to_string(), json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::UpstreamUnavailable(_)));
    }
}
