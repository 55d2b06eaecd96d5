// System prompts and decoding parameters for the live writing operations.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::DecodingParams;

/// System prompt for content generation. Replace `{content_type}` and `{tone}`.
pub const CONTENT_SYSTEM_TEMPLATE: &str =
    "You are a professional {content_type} writer. Write in a {tone} tone.";

/// System prompt for rewriting.
pub const REWRITE_SYSTEM: &str = "You are an expert editor. \
    Rewrite the user's text in the requested tone while keeping its meaning.";

/// Rewrite prompt template. Replace `{tone}` and `{text}`.
pub const REWRITE_PROMPT_TEMPLATE: &str = "Rewrite the following text in a {tone} tone:\n\n{text}";

/// System prompt for summarization.
pub const SUMMARIZE_SYSTEM: &str = "You are a precise summarizer. \
    Keep the key facts and drop everything else.";

/// Summarize prompt template. Replace `{word_limit}` and `{text}`.
pub const SUMMARIZE_PROMPT_TEMPLATE: &str =
    "Summarize the following text in at most {word_limit} words:\n\n{text}";

/// System prompt for grammar checking.
pub const GRAMMAR_SYSTEM: &str = "You are a meticulous proofreader.";

/// Grammar prompt template. Replace `{language}` and `{text}`.
pub const GRAMMAR_PROMPT_TEMPLATE: &str = r#"Proofread the following {language} text.

Return a JSON object with this EXACT schema (no extra fields):
{
  "corrected_text": "the full text with every correction applied",
  "errors": [
    {"kind": "spelling", "message": "Misspelled word", "original": "teh", "suggestion": "the"}
  ],
  "suggestions": ["Short, actionable style advice"]
}

`kind` is one of "spelling", "grammar", "punctuation", "capitalization".

TEXT:
{text}"#;

pub const CONTENT_PARAMS: DecodingParams = DecodingParams {
    temperature: 0.7,
    max_tokens: 500,
};

pub const CONTENT_LONG_PARAMS: DecodingParams = DecodingParams {
    temperature: 0.7,
    max_tokens: 1000,
};

pub const REWRITE_PARAMS: DecodingParams = DecodingParams {
    temperature: 0.7,
    max_tokens: 800,
};

pub const GRAMMAR_PARAMS: DecodingParams = DecodingParams {
    temperature: 0.2,
    max_tokens: 1000,
};

/// Summaries are kept deterministic-ish; the token cap follows the length tier.
pub const fn summarize_params(max_tokens: u32) -> DecodingParams {
    DecodingParams {
        temperature: 0.3,
        max_tokens,
    }
}
