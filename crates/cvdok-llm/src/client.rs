//! Gemini structuring client
//!
//! Single point of entry for model calls: one blocking `generateContent`
//! request per resume, with the response mime type pinned to JSON. Parse
//! failures are surfaced to the caller as-is; there is no automatic retry.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use cvdok_model::ResumeRecord;

use crate::error::{LlmError, Result};
use crate::prompts::structure_prompt;

/// Default Gemini API endpoint
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// The model used for all structuring calls
pub const MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const TEMPERATURE: f32 = 0.7;
const JSON_MIME: &str = "application/json";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ReplyContent>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate part, if any
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// Base URL of the API server
    base_url: String,
    /// HTTP client
    client: Client,
    /// API key sent with each request
    api_key: String,
}

impl GeminiClient {
    /// Create a client against the default API endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(DEFAULT_API_URL, api_key)
    }

    /// Create a client against a custom API endpoint (used by tests and
    /// proxies)
    pub fn with_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            client,
            api_key: api_key.into(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(LlmError::MissingApiKey(API_KEY_ENV)),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make one `generateContent` call and return the raw reply text
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL);
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                response_mime_type: JSON_MIME,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            // Prefer the API's own error message when the body parses
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateResponse = response.json()?;
        reply
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }

    /// Structure extracted resume text into a [`ResumeRecord`]
    ///
    /// Optional free-form style instructions are inserted between the
    /// schema prompt and the resume text. A reply that is not valid JSON
    /// for the schema is an error, not a retry.
    pub fn parse_resume(
        &self,
        resume_text: &str,
        instructions: Option<&str>,
    ) -> Result<ResumeRecord> {
        let prompt = structure_prompt(resume_text, instructions);
        let raw = self.generate(&prompt)?;

        let json = strip_json_fences(&raw);
        let record: ResumeRecord = serde_json::from_str(json)?;
        log::debug!(
            "structured resume for '{}': {} experience entries",
            record.name,
            record.experience.len()
        );
        Ok(record)
    }
}

/// Strip ```json ... ``` or ``` ... ``` fences a model sometimes wraps
/// JSON in despite instructions
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
