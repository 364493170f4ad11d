//! Wire types for the `generateContent` endpoint

use super::error::{GeminiError, Result};
use serde::{Deserialize, Serialize};

/// Request body: a single user turn with one text part
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(text.into()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Only text parts are read; others deserialize with `text: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all text parts concatenated
    pub fn text(&self) -> Result<String> {
        let Some(candidate) = self.candidates.first() else {
            let reason = self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone());
            return Err(match reason {
                Some(reason) => GeminiError::Blocked(reason),
                None => GeminiError::NoText("no candidates".to_string()),
            });
        };

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            return Err(GeminiError::NoText(
                candidate
                    .finish_reason
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        Ok(text)
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorResponse {
    /// Build a [`GeminiError::Api`] from a raw error body, falling back to the
    /// body text when it is not the documented JSON shape
    pub fn into_error(status: u16, body: &str) -> GeminiError {
        let message = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(parsed) => match parsed.error.status {
                Some(code) => format!("{} {}", code, parsed.error.message),
                None => parsed.error.message,
            },
            Err(_) if body.trim().is_empty() => "no error details".to_string(),
            Err(_) => body.trim().to_string(),
        };
        GeminiError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_text("Convert 1.0 mile to yard."))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "Convert 1.0 mile to yard."}]}
                ]
            })
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "1 mile is "}, {"text": "1760 yards.\n"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 7}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "1 mile is 1760 yards.\n");
    }

    #[test]
    fn test_blocked_prompt() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response.text(), Err(GeminiError::Blocked(ref r)) if r == "SAFETY"));
    }

    #[test]
    fn test_candidate_without_text() {
        let json = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(response.text(), Err(GeminiError::NoText(ref r)) if r == "MAX_TOKENS"));
    }

    #[test]
    fn test_api_error_body() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let err = ApiErrorResponse::into_error(429, body);
        assert!(matches!(
            err,
            GeminiError::Api { status: 429, ref message } if message == "RESOURCE_EXHAUSTED Quota exceeded"
        ));
    }

    #[test]
    fn test_api_error_plain_body() {
        let err = ApiErrorResponse::into_error(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "API error (502): Bad Gateway");
    }
}
