use crate::errors::AppError;
use crate::llm_client::prompts::PLAIN_OUTPUT_INSTRUCTION;
use crate::writing::backend::GenerationBackend;
use crate::writing::estimate_tokens;
use crate::writing::models::{RewriteRequest, RewriteResponse};
use crate::writing::prompts::{REWRITE_PARAMS, REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM};

const PROFESSIONAL_PREFIX: &str = "In a professional capacity: ";
const CASUAL_PREFIX: &str = "So basically, ";
const FRIENDLY_PREFIX: &str = "Hey there! ";
const FORMAL_PREFIX: &str = "It is hereby stated that ";

pub async fn rewrite_text(
    backend: &GenerationBackend,
    request: &RewriteRequest,
) -> Result<RewriteResponse, AppError> {
    let (rewritten_text, tokens_used) = match backend {
        GenerationBackend::Live(llm) => {
            let prompt = REWRITE_PROMPT_TEMPLATE
                .replace("{tone}", &request.tone)
                .replace("{text}", &request.text);
            let system = format!("{REWRITE_SYSTEM} {PLAIN_OUTPUT_INSTRUCTION}");
            llm.call_text(&prompt, &system, REWRITE_PARAMS).await?
        }
        GenerationBackend::Mock => {
            let text = mock_rewrite(&request.text, &request.tone);
            let tokens = estimate_tokens(&text);
            (text, tokens)
        }
    };

    Ok(RewriteResponse {
        rewritten_text,
        tone: request.tone.clone(),
        tokens_used,
    })
}

/// Applies the fixed template for `tone`. Unknown tones return the text unchanged.
fn mock_rewrite(text: &str, tone: &str) -> String {
    match tone {
        "professional" => format!("{PROFESSIONAL_PREFIX}{text}"),
        "casual" => format!("{CASUAL_PREFIX}{}", text.to_lowercase()),
        "friendly" => format!("{FRIENDLY_PREFIX}{text}"),
        "formal" => format!("{FORMAL_PREFIX}{text}"),
        _ => text.to_string(),
    }
}
