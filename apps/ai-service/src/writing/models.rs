//! Request and response bodies for the writing endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

fn default_tone() -> String {
    "professional".to_string()
}

fn default_content_length() -> String {
    "medium".to_string()
}

fn default_summary_length() -> String {
    "short".to_string()
}

// An explicit `null` means the same as an omitted field.
fn tone_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_tone))
}

fn content_length_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_content_length))
}

fn summary_length_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_summary_length))
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub prompt: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default = "default_tone", deserialize_with = "tone_or_default")]
    pub tone: String,
    #[serde(
        default = "default_content_length",
        deserialize_with = "content_length_or_default"
    )]
    pub length: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrammarRequest {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub tone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(
        default = "default_summary_length",
        deserialize_with = "summary_length_or_default"
    )]
    pub length: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeOptimizeRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// `parties` and `terms` are required and validated, but the static contract
/// documents do not interpolate them.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractRequest {
    pub contract_type: String,
    pub parties: Vec<Map<String, Value>>,
    pub terms: HashMap<String, Value>,
}

/// `details` is required but not interpolated, like `ContractRequest::terms`.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateRequest {
    pub template_type: String,
    pub details: HashMap<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentResponse {
    pub content: String,
    pub tokens_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrammarIssue {
    pub kind: String,
    pub message: String,
    pub original: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrammarResponse {
    pub corrected_text: String,
    pub errors: Vec<GrammarIssue>,
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub tokens_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewriteResponse {
    pub rewritten_text: String,
    pub tone: String,
    pub tokens_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizeResponse {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub tokens_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeOptimizeResponse {
    pub optimized_resume: String,
    pub ats_score: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub tokens_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractResponse {
    pub contract_content: String,
    pub contract_type: String,
    pub sections: Vec<String>,
    pub tokens_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateResponse {
    pub content: String,
    pub template_type: String,
    pub tokens_used: u32,
}
