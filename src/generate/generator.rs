//! Core `RecipeGenerator` trait and `ApiGenerator` implementation.
//!
//! `ApiGenerator` talks to either the Gemini `generateContent` REST API or
//! any OpenAI-compatible `/v1/chat/completions` endpoint.  All connection
//! details come from [`GeneratorConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{GeneratorConfig, GeneratorProvider, Language};
use crate::generate::prompt::PromptBuilder;

// ---------------------------------------------------------------------------
// GenerateError
// ---------------------------------------------------------------------------

/// Errors that can occur while generating recipe text.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("generator returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request did not complete within the configured timeout.
    #[error("recipe generation timed out")]
    Timeout,

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse generator response: {0}")]
    Parse(String),

    /// The generator returned no usable text.
    #[error("generator returned an empty response")]
    EmptyResponse,

    /// No API key is configured for a provider that needs one.
    #[error("API key is not configured")]
    MissingApiKey,

    /// Generation is switched off in the configuration.
    #[error("recipe generation is disabled")]
    Disabled,
}

impl GenerateError {
    /// Render as `"<prefix>: <message>"` with the language's error prefix.
    pub fn to_sentinel(&self, language: Language) -> String {
        format!("{}: {}", language.error_prefix(), self)
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GenerateError::Timeout
        } else {
            GenerateError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// RecipeGenerator trait
// ---------------------------------------------------------------------------

/// Async trait for producing raw recipe text for a dish name.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn RecipeGenerator>`.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn generate(&self, dish: &str) -> Result<String, GenerateError>;
}

// ---------------------------------------------------------------------------
// ApiGenerator
// ---------------------------------------------------------------------------

/// Generates recipes through a hosted text-generation API.
pub struct ApiGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
    prompt_builder: PromptBuilder,
}

impl ApiGenerator {
    /// Build an `ApiGenerator` from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`; a default client is used if the builder fails.
    pub fn from_config(config: &GeneratorConfig, language: Language) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            prompt_builder: PromptBuilder::new(language),
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn generate_gemini(&self, dish: &str) -> Result<String, GenerateError> {
        let key = self.config.api_key().ok_or(GenerateError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url(),
            self.config.model
        );

        let body = serde_json::json!({
            "contents": [
                { "role": "user", "parts": [ { "text": self.prompt_builder.build(dish) } ] }
            ],
            "generationConfig": {
                "temperature":     self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens
            }
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?;
        let json = read_json(response).await?;

        gemini_text(&json)
    }

    async fn generate_chat(&self, dish: &str) -> Result<String, GenerateError> {
        let (system_msg, user_msg) = self.prompt_builder.build_chat(dish);
        let url = format!("{}/v1/chat/completions", self.base_url());

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature,
            "max_tokens":  self.config.max_output_tokens
        });

        let mut req = self.client.post(&url).json(&body);

        // Local servers (Ollama, LM Studio) run without a key.
        if let Some(key) = self.config.api_key() {
            req = req.bearer_auth(key);
        }

        let json = read_json(req.send().await?).await?;

        chat_text(&json)
    }
}

#[async_trait]
impl RecipeGenerator for ApiGenerator {
    async fn generate(&self, dish: &str) -> Result<String, GenerateError> {
        log::info!(
            "generator: requesting recipe for {:?} from {:?} ({})",
            dish,
            self.config.provider,
            self.config.model
        );

        let text = match self.config.provider {
            GeneratorProvider::Gemini => self.generate_gemini(dish).await?,
            GeneratorProvider::OpenAiCompatible => self.generate_chat(dish).await?,
            GeneratorProvider::Disabled => return Err(GenerateError::Disabled),
        };

        log::debug!("generator: received {} bytes", text.len());
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, GenerateError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GenerateError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| GenerateError::Parse(e.to_string()))
}

/// Concatenate the text parts of the first Gemini candidate.
fn gemini_text(json: &serde_json::Value) -> Result<String, GenerateError> {
    let parts = json["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| GenerateError::Parse("missing candidates[0].content.parts".into()))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();

    non_empty(text)
}

fn chat_text(json: &serde_json::Value) -> Result<String, GenerateError> {
    let text = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(GenerateError::EmptyResponse)?;

    non_empty(text.to_string())
}

fn non_empty(text: String) -> Result<String, GenerateError> {
    let text = text.trim();
    if text.is_empty() {
        Err(GenerateError::EmptyResponse)
    } else {
        Ok(text.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(provider: GeneratorProvider, api_key: Option<&str>) -> GeneratorConfig {
        GeneratorConfig {
            provider,
            api_key: api_key.map(|s| s.to_string()),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let config = make_config(GeneratorProvider::Gemini, Some("key"));
        let _generator = ApiGenerator::from_config(&config, Language::English);
    }

    #[test]
    fn generator_is_object_safe() {
        let config = make_config(GeneratorProvider::OpenAiCompatible, None);
        let generator: Box<dyn RecipeGenerator> =
            Box::new(ApiGenerator::from_config(&config, Language::Korean));
        drop(generator);
    }

    #[tokio::test]
    async fn gemini_without_key_fails_before_any_request() {
        let config = make_config(GeneratorProvider::Gemini, Some("  "));
        let generator = ApiGenerator::from_config(&config, Language::English);
        let err = generator.generate("toast").await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));
    }

    #[tokio::test]
    async fn disabled_provider_fails() {
        let config = make_config(GeneratorProvider::Disabled, Some("key"));
        let generator = ApiGenerator::from_config(&config, Language::English);
        let err = generator.generate("toast").await.unwrap_err();
        assert!(matches!(err, GenerateError::Disabled));
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let mut config = make_config(GeneratorProvider::Gemini, None);
        config.base_url = "http://localhost:8080/".into();
        let generator = ApiGenerator::from_config(&config, Language::English);
        assert_eq!(generator.base_url(), "http://localhost:8080");
    }

    #[test]
    fn gemini_text_joins_parts() {
        let json = serde_json::json!({
            "candidates": [ { "content": { "parts": [ { "text": "【Steps】:\n" }, { "text": "1. Eat.\n" } ] } } ]
        });
        assert_eq!(gemini_text(&json).unwrap(), "【Steps】:\n1. Eat.");
    }

    #[test]
    fn gemini_text_rejects_missing_candidates() {
        let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(matches!(gemini_text(&json), Err(GenerateError::Parse(_))));
    }

    #[test]
    fn chat_text_extracts_content() {
        let json = serde_json::json!({
            "choices": [ { "message": { "role": "assistant", "content": "  recipe  " } } ]
        });
        assert_eq!(chat_text(&json).unwrap(), "recipe");
    }

    #[test]
    fn blank_content_is_empty_response() {
        let json = serde_json::json!({ "choices": [ { "message": { "content": " \n" } } ] });
        assert!(matches!(chat_text(&json), Err(GenerateError::EmptyResponse)));
    }

    #[test]
    fn sentinel_uses_language_prefix() {
        assert_eq!(
            GenerateError::Timeout.to_sentinel(Language::English),
            "Error: recipe generation timed out"
        );
        assert!(GenerateError::MissingApiKey
            .to_sentinel(Language::Korean)
            .starts_with("오류: "));
    }
}
