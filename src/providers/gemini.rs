//! Google Gemini `generateContent` backend.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::Provider;
use crate::config::Config;
use crate::error::RecipeError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider. One HTTP client, built once and held for the session.
pub struct GeminiProvider {
    client: Client,
    api_key: SecretString,
    endpoint: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString, model: &str, base_url: &str) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );

        Self {
            client: Client::new(),
            api_key,
            endpoint,
            model: model.to_owned(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self::new(config.api_key, &config.model, &config.base_url)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(prompt: &str) -> GeminiRequest<'_> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiRequestPart { text: prompt }],
            }],
        }
    }

    /// Join the text parts of the first candidate and trim the result.
    fn reply_text(resp: GeminiResponse) -> Result<String, RecipeError> {
        let candidate = resp
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| RecipeError::Provider("no candidates in response".to_owned()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
            return Err(RecipeError::Provider(format!(
                "response contained no text (finish reason: {reason})"
            )));
        }

        Ok(text.trim().to_owned())
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, RecipeError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&Self::build_request(prompt))
            .send()
            .await
            .map_err(|e| RecipeError::Provider(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecipeError::Provider(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(RecipeError::Provider(format!("HTTP {status}: {message}")));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| RecipeError::Provider(format!("failed to parse response: {e}")))?;

        Self::reply_text(parsed)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiRequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiRequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}
