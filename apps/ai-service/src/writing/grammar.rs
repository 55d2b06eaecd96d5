//! Grammar checking. The mock path is a fixed set of heuristics, not a grammar engine.

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::writing::backend::GenerationBackend;
use crate::writing::estimate_tokens;
use crate::writing::models::{GrammarIssue, GrammarRequest, GrammarResponse};
use crate::writing::prompts::{GRAMMAR_PARAMS, GRAMMAR_PROMPT_TEMPLATE, GRAMMAR_SYSTEM};

/// Known misspellings. Only these exact casings are replaced.
const SPELLING_FIXES: &[(&str, &str)] = &[("teh", "the"), ("Teh", "The")];

const PUNCTUATION_MIN_CHARS: usize = 20;

pub async fn check_grammar(
    backend: &GenerationBackend,
    request: &GrammarRequest,
) -> Result<GrammarResponse, AppError> {
    match backend {
        GenerationBackend::Live(llm) => {
            let prompt = GRAMMAR_PROMPT_TEMPLATE
                .replace("{language}", request.language.as_deref().unwrap_or("English"))
                .replace("{text}", &request.text);
            let system = format!("{GRAMMAR_SYSTEM} {JSON_ONLY_SYSTEM}");
            let (mut response, tokens_used): (GrammarResponse, u32) =
                llm.call_json(&prompt, &system, GRAMMAR_PARAMS).await?;
            response.tokens_used = tokens_used;
            Ok(response)
        }
        GenerationBackend::Mock => Ok(mock_check(&request.text)),
    }
}

fn mock_check(text: &str) -> GrammarResponse {
    let mut corrected = text.to_string();
    let mut errors = Vec::new();
    let mut suggestions = Vec::new();

    for &(wrong, right) in SPELLING_FIXES {
        if corrected.contains(wrong) {
            corrected = corrected.replace(wrong, right);
            errors.push(GrammarIssue {
                kind: "spelling".to_string(),
                message: format!("'{wrong}' is misspelled"),
                original: wrong.to_string(),
                suggestion: right.to_string(),
            });
        }
    }

    if text.chars().count() > PUNCTUATION_MIN_CHARS && !text.contains('.') {
        suggestions.push("Consider ending your sentences with a period.".to_string());
    }

    // Guarded: an empty string has no first character to inspect.
    if let Some(first) = corrected.chars().next() {
        if !first.is_uppercase() {
            suggestions.push("Start the text with a capital letter.".to_string());
            let rest = &corrected[first.len_utf8()..];
            corrected = first.to_uppercase().chain(rest.chars()).collect();
        }
    }

    let tokens_used = estimate_tokens(&corrected);
    GrammarResponse {
        corrected_text: corrected,
        errors,
        suggestions,
        tokens_used,
    }
}
