//! Prompt composer: turns a content request into a single instruction string.
//!
//! Every lookup falls back silently: an unknown content type uses the generic
//! template, unknown tone/length/language values add no clause at all.

use crate::writing::models::ContentRequest;

/// Base instruction for a content type. `{prompt}` is replaced with the topic.
fn base_template(content_type: &str) -> &'static str {
    match content_type {
        "blog" => "Write a blog post about: {prompt}",
        "email" => "Write a professional email about: {prompt}",
        "social" => "Write a social media post about: {prompt}",
        "essay" => "Write an essay about: {prompt}",
        "product" => "Write a product description for: {prompt}",
        _ => "Write content about: {prompt}",
    }
}

fn tone_clause(tone: &str) -> Option<&'static str> {
    match tone {
        "professional" => Some("Use a professional, polished tone."),
        "casual" => Some("Use a relaxed, conversational tone."),
        "formal" => Some("Use a formal tone and avoid contractions."),
        "friendly" => Some("Use a warm, friendly tone."),
        "persuasive" => Some("Use a persuasive tone with a clear call to action."),
        _ => None,
    }
}

fn length_clause(length: &str) -> Option<&'static str> {
    match length {
        "short" => Some("Keep it brief, around 100 words."),
        "medium" => Some("Aim for around 300 words."),
        "long" => Some("Write a detailed piece of around 800 words."),
        _ => None,
    }
}

fn language_clause(language: &str) -> Option<&'static str> {
    match language {
        "en-US" => Some("Use American English spelling and conventions."),
        "en-GB" => Some("Use British English spelling and conventions."),
        "en-AU" => Some("Use Australian English spelling and conventions."),
        _ => None,
    }
}

/// Builds the instruction for a content request.
pub fn compose_instruction(request: &ContentRequest) -> String {
    let mut instruction =
        base_template(&request.content_type).replace("{prompt}", request.prompt.trim());

    let clauses = [
        tone_clause(&request.tone),
        length_clause(&request.length),
        request.language.as_deref().and_then(language_clause),
    ];

    for clause in clauses.into_iter().flatten() {
        instruction.push(' ');
        instruction.push_str(clause);
    }

    instruction
}
