use crate::errors::AppError;
use crate::llm_client::prompts::PLAIN_OUTPUT_INSTRUCTION;
use crate::writing::backend::GenerationBackend;
use crate::writing::models::{SummarizeRequest, SummarizeResponse};
use crate::writing::prompts::{summarize_params, SUMMARIZE_PROMPT_TEMPLATE, SUMMARIZE_SYSTEM};
use crate::writing::{estimate_tokens, word_count};

const SHORT_WORDS: usize = 20;
const MEDIUM_WORDS: usize = 50;
const LONG_WORDS: usize = 100;

const ELLIPSIS: &str = "...";

/// Word limit for a length tier. Unknown tiers behave like "short".
fn word_limit(length: &str) -> usize {
    match length {
        "medium" => MEDIUM_WORDS,
        "long" => LONG_WORDS,
        _ => SHORT_WORDS,
    }
}

/// Provider token cap for a length tier.
fn max_tokens(length: &str) -> u32 {
    match length {
        "medium" => 300,
        "long" => 600,
        _ => 150,
    }
}

pub async fn summarize_text(
    backend: &GenerationBackend,
    request: &SummarizeRequest,
) -> Result<SummarizeResponse, AppError> {
    let original_length = word_count(&request.text);

    match backend {
        GenerationBackend::Live(llm) => {
            let limit = word_limit(&request.length);
            let prompt = SUMMARIZE_PROMPT_TEMPLATE
                .replace("{word_limit}", &limit.to_string())
                .replace("{text}", &request.text);
            let system = format!("{SUMMARIZE_SYSTEM} {PLAIN_OUTPUT_INSTRUCTION}");
            let params = summarize_params(max_tokens(&request.length));
            let (summary, tokens_used) = llm.call_text(&prompt, &system, params).await?;
            Ok(SummarizeResponse {
                summary_length: word_count(&summary),
                summary,
                original_length,
                tokens_used,
            })
        }
        GenerationBackend::Mock => Ok(mock_summarize(&request.text, &request.length)),
    }
}

fn mock_summarize(text: &str, length: &str) -> SummarizeResponse {
    let words: Vec<&str> = text.split_whitespace().collect();
    let original_length = words.len();

    if original_length <= SHORT_WORDS {
        return SummarizeResponse {
            summary: text.to_string(),
            original_length,
            summary_length: original_length,
            tokens_used: estimate_tokens(text),
        };
    }

    let kept = &words[..word_limit(length).min(original_length)];
    let summary = format!("{}{ELLIPSIS}", kept.join(" "));

    SummarizeResponse {
        tokens_used: estimate_tokens(&summary),
        summary,
        original_length,
        summary_length: kept.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(n: usize) -> String {
        (1..=n)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join("  ")
    }

    #[test]
    fn test_short_input_is_returned_verbatim() {
        let text = "  Twenty words or fewer\nstay exactly as written.  ";
        let response = mock_summarize(text, "long");
        assert_eq!(response.summary, text);
        assert_eq!(response.summary_length, response.original_length);
        assert_eq!(response.original_length, 8);
    }

    #[test]
    fn test_exactly_twenty_words_is_not_truncated() {
        let text = numbered_words(20);
        let response = mock_summarize(&text, "short");
        assert_eq!(response.summary, text);
        assert_eq!(response.summary_length, 20);
    }

    #[test]
    fn test_short_tier_keeps_first_twenty_words() {
        let response = mock_summarize(&numbered_words(30), "short");
        let expected = format!("{}...", (1..=20).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" "));
        assert_eq!(response.summary, expected);
        assert_eq!(response.original_length, 30);
        assert_eq!(response.summary_length, 20);
    }

    #[test]
    fn test_medium_and_long_tiers() {
        let text = numbered_words(150);
        assert_eq!(mock_summarize(&text, "medium").summary_length, 50);
        assert_eq!(mock_summarize(&text, "long").summary_length, 100);
    }

    #[test]
    fn test_tier_longer_than_text_keeps_every_word() {
        let response = mock_summarize(&numbered_words(30), "long");
        assert_eq!(response.summary_length, 30);
        assert!(response.summary.ends_with("w30..."));
    }

    #[test]
    fn test_unknown_tier_behaves_like_short() {
        assert_eq!(mock_summarize(&numbered_words(40), "tiny").summary_length, 20);
    }
}
