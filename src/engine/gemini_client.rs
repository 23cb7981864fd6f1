use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::engine::error::GenerateError;
use crate::engine::plan_decode::decode_plan;
use crate::engine::prompt_builder::{response_schema, PromptBuilder};
use crate::model::form_input::FormInput;
use crate::model::lesson_plan::LessonPlan;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Credential and model selection, injected at startup. The client never
/// reads the process environment itself.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl ClientConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// The single outbound call the app makes: prompt + schema in, raw text out.
/// Split out as a trait so the decode path can be exercised without a
/// network in tests.
pub trait TextGenerator {
    fn generate_text(&self, prompt: &str, schema: &Value) -> Result<String, GenerateError>;
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Fails fast when no credential is configured; no request is ever
    /// attempted without one.
    pub fn new(config: ClientConfig) -> Result<Self, GenerateError> {
        let api_key = match config.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(GenerateError::MissingApiKey),
        };

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            api_key,
            model: config.model,
        })
    }
}

impl TextGenerator for GeminiClient {
    fn generate_text(&self, prompt: &str, schema: &Value) -> Result<String, GenerateError> {
        let req = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema.clone(),
            },
        };

        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        debug!(model = %self.model, "sending generateContent request");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&req)
            .send()?
            .error_for_status()?
            .json::<GenerateContentResponse>()?;

        let text: String = resp
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text)
    }
}

/// One submission, end to end: build the prompt, make exactly one provider
/// call, decode the reply. No retries, no caching.
pub fn generate_plan(
    provider: &dyn TextGenerator,
    form: &FormInput,
) -> Result<LessonPlan, GenerateError> {
    let prompt = PromptBuilder::build(form);
    let schema = response_schema();
    let raw = provider.generate_text(&prompt, &schema)?;
    decode_plan(&raw)
}
