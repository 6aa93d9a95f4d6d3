//! GeminiClient - Direct REST implementation for the Gemini API.
//!
//! Calls the `generateContent` endpoint with the full conversation history.
//! The `contents` array already includes the latest user turn; Gemini's
//! contract has no separate "current message" parameter.

use crate::service::GenerateService;
use farol_core::{FarolError, Result, Turn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn build_request(history: &[Turn]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: history
                .iter()
                .map(|turn| Content {
                    role: turn.role.as_wire_str().to_string(),
                    parts: vec![Part {
                        text: turn.content.clone(),
                    }],
                })
                .collect(),
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| FarolError::Http(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| FarolError::Http(format!("Failed to parse Gemini response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait::async_trait]
impl GenerateService for GeminiClient {
    async fn generate(&self, history: &[Turn]) -> Result<String> {
        let request = Self::build_request(history);
        tracing::debug!(
            model = %self.model,
            turns = request.contents.len(),
            "sending generateContent request"
        );
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(FarolError::EmptyResponse)
}

fn map_http_error(status: StatusCode, body: String) -> FarolError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    FarolError::api(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use farol_core::TurnRole;

    #[test]
    fn test_build_request_maps_roles_and_order() {
        let history = vec![
            Turn::user("instrução oculta"),
            Turn::user("Quais praias você recomenda?"),
        ];

        let request = GeminiClient::build_request(&history);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"].as_array().unwrap().len(), 2);
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "instrução oculta");
        assert_eq!(
            value["contents"][1]["parts"][0]["text"],
            "Quais praias você recomenda?"
        );
    }

    #[test]
    fn test_build_request_uses_model_role_tag() {
        let history = vec![Turn::new(TurnRole::Model, "Praia do Farol!")];
        let request = GeminiClient::build_request(&history);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "model");
    }

    #[test]
    fn test_extract_text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Praia do Farol! 🎉"}]}},
                    {"content": {"parts": [{"text": "segunda opção"}]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(extract_text_response(response).unwrap(), "Praia do Farol! 🎉");
    }

    #[test]
    fn test_extract_text_without_candidates_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_text_response(response),
            Err(FarolError::EmptyResponse)
        ));
    }

    #[test]
    fn test_extract_text_skips_partless_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{}, {"text": "achei"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text_response(response).unwrap(), "achei");
    }

    #[test]
    fn test_map_http_error_parses_gemini_wrapper() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string());

        match err {
            FarolError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "RESOURCE_EXHAUSTED: Quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "<html>upstream down</html>".to_string());

        match err {
            FarolError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>upstream down</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
