//! Gemini API client for AI-generated activity reports.
//!
//! Sends a templated natural-language prompt embedding a bounded sample of
//! the to-do list to the generative-model endpoint, then pulls a best-effort
//! JSON object out of the free-text reply. The extraction is deliberately
//! lenient: a fenced ```json block is preferred, the first balanced `{...}`
//! span is the fallback, and anything unusable degrades to an empty-valued
//! report instead of a parse error. Availability beats strictness for a
//! non-critical insight feature.
//!
//! Network and HTTP failures are real errors with readable messages; only
//! parsing is forgiving.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::libs::todo::Todo;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const SECRET_FILE: &str = ".gemini_api_key";
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Upper bound on to-dos embedded in a prompt.
const PROMPT_SAMPLE_LIMIT: usize = 15;

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Structured activity report extracted from the model reply. Every field
/// defaults to empty, so a reply with no usable JSON still yields a
/// well-formed (if hollow) report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiReport {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
}

/// Procrastination analysis extracted from the model reply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcrastinationReport {
    #[serde(default)]
    pub frequent_categories: Vec<String>,
    #[serde(default)]
    pub frequent_time_slots: Vec<String>,
    #[serde(default)]
    pub comment: String,
}

pub struct Gemini {
    client: Client,
    config: GeminiConfig,
    secret: Secret,
}

impl Gemini {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret: Secret::new(SECRET_FILE, "Enter your Gemini API key"),
        }
    }

    /// Generates a period report for the given to-dos. Parse problems yield
    /// an empty-valued report, never an error.
    pub async fn generate_report(&mut self, todos: &[Todo], period_label: &str) -> Result<AiReport> {
        let prompt = report_prompt(todos, period_label);
        let text = self.generate(&prompt).await?;
        Ok(parse_lenient(&text))
    }

    /// Looks for procrastination patterns in the open to-dos.
    pub async fn analyze_procrastination(&mut self, todos: &[Todo]) -> Result<ProcrastinationReport> {
        let prompt = procrastination_prompt(todos);
        let text = self.generate(&prompt).await?;
        Ok(parse_lenient(&text))
    }

    async fn generate(&mut self, prompt: &str) -> Result<String> {
        let api_key = self.secret.get_or_prompt()?;
        let url = format!("{}/models/{}:generateContent?key={}", self.config.api_url, self.config.model, api_key);

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt.to_string() }],
            }],
        };

        let res = self.client.post(&url).json(&request).send().await?;
        if !res.status().is_success() {
            msg_bail_anyhow!(Message::AiRequestFailed(res.status().to_string()));
        }

        let body: GenerateResponse = res.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        msg_debug!(format!("Gemini reply: {} chars", text.len()));
        Ok(text)
    }
}

fn report_prompt(todos: &[Todo], period_label: &str) -> String {
    let mut prompt = format!(
        "You are a productivity assistant. Review this {} of personal to-dos and answer \
         with a single JSON object shaped as {{\"summary\": string, \"insights\": [string], \
         \"action_items\": [string]}}. No prose outside the JSON.\n\nTo-dos:\n",
        period_label
    );
    push_sample(&mut prompt, todos);
    prompt
}

fn procrastination_prompt(todos: &[Todo]) -> String {
    let mut prompt = "You are a productivity assistant. Find procrastination patterns in these \
         personal to-dos and answer with a single JSON object shaped as \
         {\"frequent_categories\": [string], \"frequent_time_slots\": [string], \
         \"comment\": string}. No prose outside the JSON.\n\nTo-dos:\n"
        .to_string();
    push_sample(&mut prompt, todos);
    prompt
}

fn push_sample(prompt: &mut String, todos: &[Todo]) {
    for todo in todos.iter().take(PROMPT_SAMPLE_LIMIT) {
        prompt.push_str(&format!(
            "- [{}] {} (category: {}, priority: {}, created: {})\n",
            if todo.is_completed { "x" } else { " " },
            todo.title,
            todo.category,
            todo.priority.as_str(),
            todo.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }
}

/// Extracts the most plausible JSON object from free-form model output:
/// the contents of the first fenced code block when present, otherwise the
/// first balanced `{...}` span.
pub fn extract_json_block(text: &str) -> Option<&str> {
    if let Some(fenced) = extract_fenced_block(text) {
        return Some(fenced);
    }
    extract_brace_span(text)
}

fn extract_fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // Skip an optional language tag on the fence line.
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    let block = body[..close].trim();
    if block.starts_with('{') {
        Some(block)
    } else {
        None
    }
}

fn extract_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Best-effort parse into any default-able shape. Missing or malformed JSON
/// yields the empty default.
pub fn parse_lenient<T: Default + DeserializeOwned>(text: &str) -> T {
    extract_json_block(text)
        .and_then(|block| serde_json::from_str(block).ok())
        .unwrap_or_default()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeminiConfig {
    pub api_url: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "gemini".to_string(),
            name: "Gemini".to_string(),
        }
    }

    pub fn init(config: &Option<GeminiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        });
        println!("Gemini settings");
        let built = Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the Gemini API base URL")
                .default(config.api_url)
                .interact_text()?,
            model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the model name")
                .default(config.model)
                .interact_text()?,
        };

        // Prompt for and store the API key right away so the first report
        // call does not stop for input.
        Secret::new(SECRET_FILE, "Enter your Gemini API key").prompt()?;
        Ok(built)
    }
}
