//! Remote text-generation client for assist actions.
//!
//! Thin wrapper over the OpenAI Responses API. The client never touches
//! the document store: generated text only persists when the caller
//! explicitly writes it back.

use crate::models::Theme;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/responses";
const DEFAULT_MODEL: &str = "gpt-5-mini";

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Missing env var: {0}")]
    MissingApiKey(&'static str),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Assist API error {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Assist API returned empty output")]
    EmptyOutput,
}

/// Remote assist modes. Distinct from the local rewrite rules: these ask
/// a model to rewrite the document instead of applying a deterministic
/// transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistMode {
    Improve,
    Summarize,
    Expand,
    ToDocs,
    ToBlog,
    GenerateOutline,
    MermaidFromText,
}

impl AssistMode {
    pub const ALL: [AssistMode; 7] = [
        AssistMode::Improve,
        AssistMode::Summarize,
        AssistMode::Expand,
        AssistMode::ToDocs,
        AssistMode::ToBlog,
        AssistMode::GenerateOutline,
        AssistMode::MermaidFromText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssistMode::Improve => "improve",
            AssistMode::Summarize => "summarize",
            AssistMode::Expand => "expand",
            AssistMode::ToDocs => "to_docs",
            AssistMode::ToBlog => "to_blog",
            AssistMode::GenerateOutline => "generate_outline",
            AssistMode::MermaidFromText => "mermaid_from_text",
        }
    }

    fn task(&self) -> &'static str {
        match self {
            AssistMode::Improve => "Improve clarity, grammar, and structure. Keep same intent.",
            AssistMode::Summarize => {
                "Add a short TL;DR section at the top and a brief summary at the end."
            }
            AssistMode::Expand => {
                "Expand this content with more detail, examples, and edge cases. Do not add fake facts."
            }
            AssistMode::ToDocs => {
                "Rewrite into documentation format with sections and bullet points."
            }
            AssistMode::ToBlog => {
                "Rewrite into a blog post style with a hook, sections, and conclusion."
            }
            AssistMode::GenerateOutline => {
                "Create a detailed outline (headings + bullets) for this content."
            }
            AssistMode::MermaidFromText => {
                "Generate a Mermaid diagram (```mermaid fenced block) that represents the process/flow described."
            }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown assist mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for AssistMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssistMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Build the instruction string for an assist request.
pub fn build_instruction(mode: AssistMode, theme: Theme) -> String {
    let base = "You are an expert technical writer. Output ONLY valid Markdown. \
                Do not wrap in triple backticks. Preserve meaning and factual content. \
                Keep headings and structure clean.";

    let theme_hint = match theme {
        Theme::Blog => "Write in a blog style: friendly, narrative, with smooth transitions.",
        Theme::Docs => {
            "Write in docs style: crisp, scannable, with clear headings and bullet points."
        }
    };

    format!("{}\n{}\nTASK: {}", base, theme_hint, mode.task())
}

/// Client for the text-generation capability.
pub struct AssistClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl AssistClient {
    /// Build a client from `OPENAI_API_KEY` and `OPENAI_MODEL`.
    pub fn from_env() -> Result<Self, AssistError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AssistError::MissingApiKey("OPENAI_API_KEY"))?;
        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(DEFAULT_ENDPOINT, api_key, model))
    }

    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Run one assist request: send instructions plus the document, return
    /// the generated markdown. Upstream failures surface with the remote
    /// message preserved.
    pub async fn generate(
        &self,
        instructions: &str,
        document: &str,
    ) -> Result<String, AssistError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "instructions": instructions,
                "input": document,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data: Value = response.json().await?;
        let markdown = extract_output_text(&data);
        if markdown.is_empty() {
            return Err(AssistError::EmptyOutput);
        }

        Ok(markdown)
    }

    /// Convenience: build instructions for `mode`/`theme` and generate.
    pub async fn run(
        &self,
        mode: AssistMode,
        theme: Theme,
        document: &str,
    ) -> Result<String, AssistError> {
        let instructions = build_instruction(mode, theme);
        tracing::debug!("Assist request: mode={} theme={}", mode.as_str(), theme.as_str());
        self.generate(&instructions, document).await
    }
}

/// Pull text out of a Responses API payload: the `output_text`
/// convenience field when present, otherwise a best-effort walk of the
/// `output` items.
fn extract_output_text(data: &Value) -> String {
    if let Some(text) = data.get("output_text").and_then(Value::as_str) {
        return text.trim().to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(output) = data.get("output").and_then(Value::as_array) {
        for item in output {
            let Some(content) = item.get("content").and_then(Value::as_array) else {
                continue;
            };
            for c in content {
                if let Some(text) = c.get("text").and_then(Value::as_str) {
                    parts.push(text.to_string());
                }
                if let Some(value) = c.get("value").and_then(Value::as_str) {
                    parts.push(value.to_string());
                }
            }
        }
    }

    parts.join("\n").trim().to_string()
}
