use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::ports::LLMClient,
};

const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    endpoint: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
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
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

impl GeminiRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

impl GeminiResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
    }
}

/// Prefer the API's own error message over the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

impl GeminiLLMClient {
    pub fn new(endpoint: String, model_name: String) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model_name,
            client: Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model_name)
    }

    async fn call_gemini_api(&self, request: GeminiRequest, api_key: &str) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::service_response(None, format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read Gemini response: {}", e.without_url());
            CoreError::service_response(Some(status.as_u16()), "failed to read LLM response body")
        })?;

        read_response(status, &body)
    }
}

/// Map a generateContent reply onto the first candidate's text.
fn read_response(status: StatusCode, body: &str) -> Result<String, CoreError> {
    if !status.is_success() {
        let message = error_message(body);
        tracing::error!("Gemini API error: {} - {}", status, message);
        return Err(CoreError::service_response(Some(status.as_u16()), message));
    }

    let gemini_response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse Gemini response: {}", e);
        CoreError::service_response(
            Some(status.as_u16()),
            format!("Failed to parse LLM response: {}", e),
        )
    })?;

    gemini_response
        .first_text()
        .ok_or_else(|| CoreError::service_response(Some(status.as_u16()), "No response from LLM"))
}

impl LLMClient for GeminiLLMClient {
    async fn generate_text(&self, prompt: String, api_key: String) -> Result<String, CoreError> {
        self.call_gemini_api(GeminiRequest::from_prompt(prompt), &api_key)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GeminiRequest::from_prompt("hello".to_string())).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generationConfig": {
                    "temperature": 0.7f32,
                    "topK": 40,
                    "topP": 0.95f32,
                    "maxOutputTokens": 1024
                }
            })
        );
    }

    #[test]
    fn test_first_text_extracts_first_candidate() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "RECOMMENDATION: 1" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("RECOMMENDATION: 1"));
    }

    #[test]
    fn test_first_text_missing_path_is_none() {
        for body in [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [{ "finishReason": "SAFETY" }] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "inlineData": {} }] } }] }),
        ] {
            let response: GeminiResponse = serde_json::from_value(body).unwrap();
            assert_eq!(response.first_text(), None);
        }
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "API key not valid");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_read_response_returns_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"RECOMMENDATION: 2"}]}}]}"#;
        assert_eq!(
            read_response(StatusCode::OK, body).unwrap(),
            "RECOMMENDATION: 2"
        );
    }

    #[test]
    fn test_read_response_keeps_upstream_status_and_message() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(
            read_response(StatusCode::FORBIDDEN, body).unwrap_err(),
            CoreError::service_response(Some(403), "API key not valid")
        );

        assert_eq!(
            read_response(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").unwrap_err(),
            CoreError::service_response(Some(500), "upstream exploded")
        );
    }

    #[test]
    fn test_read_response_rejects_invalid_envelope() {
        let err = read_response(StatusCode::OK, "<html>not json</html>").unwrap_err();
        assert!(matches!(
            err,
            CoreError::ServiceResponse {
                status: Some(200),
                ref message,
            } if message.starts_with("Failed to parse LLM response")
        ));
    }

    #[test]
    fn test_read_response_without_candidate_text() {
        for body in [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{"finishReason":"SAFETY"}]}"#,
        ] {
            assert_eq!(
                read_response(StatusCode::OK, body).unwrap_err(),
                CoreError::service_response(Some(200), "No response from LLM")
            );
        }
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = GeminiLLMClient::new(
            "https://example.test/v1beta/".to_string(),
            "gemini-test".to_string(),
        );
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-test:generateContent"
        );
    }
}
