//! Content generation: live provider call or keyword-classified canned copy.

use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::PLAIN_OUTPUT_INSTRUCTION;
use crate::writing::backend::GenerationBackend;
use crate::writing::composer::compose_instruction;
use crate::writing::estimate_tokens;
use crate::writing::models::{ContentRequest, ContentResponse};
use crate::writing::prompts::{CONTENT_LONG_PARAMS, CONTENT_PARAMS, CONTENT_SYSTEM_TEMPLATE};

const FALLBACK_PREVIEW_CHARS: usize = 100;

pub async fn generate_content(
    backend: &GenerationBackend,
    request: &ContentRequest,
) -> Result<ContentResponse, AppError> {
    let instruction = compose_instruction(request);
    debug!("Composed instruction: {instruction}");

    match backend {
        GenerationBackend::Live(llm) => {
            let system = format!(
                "{} {PLAIN_OUTPUT_INSTRUCTION}",
                CONTENT_SYSTEM_TEMPLATE
                    .replace("{content_type}", &request.content_type)
                    .replace("{tone}", &request.tone)
            );
            let params = if request.length == "long" {
                CONTENT_LONG_PARAMS
            } else {
                CONTENT_PARAMS
            };
            let (content, tokens_used) = llm.call_text(&instruction, &system, params).await?;
            Ok(ContentResponse {
                content,
                tokens_used,
            })
        }
        GenerationBackend::Mock => {
            let content = mock_content(&instruction, request.prompt.trim());
            let tokens_used = estimate_tokens(&content);
            Ok(ContentResponse {
                content,
                tokens_used,
            })
        }
    }
}

/// Classifies the instruction by keyword and returns canned copy about `topic`.
fn mock_content(instruction: &str, topic: &str) -> String {
    let lowered = instruction.to_lowercase();

    if lowered.contains("blog") {
        format!(
            "# {topic}\n\n\
             {topic} keeps coming up in conversations with teams of every size, \
             and for good reason. Getting it right saves time, reduces friction \
             and gives everyone a shared vocabulary. In this post we look at what \
             matters most about {topic}, the mistakes worth avoiding and a few \
             practical steps you can take this week."
        )
    } else if lowered.contains("email") {
        format!(
            "Subject: {topic}\n\n\
             Hi [Recipient],\n\n\
             I wanted to reach out regarding {topic}. I have put together a few \
             thoughts and would value your input before we move forward. \
             Could we find fifteen minutes this week to discuss next steps?\n\n\
             Best regards,\n[Your Name]"
        )
    } else if lowered.contains("social") {
        format!(
            "Big things are happening with {topic}! We have been digging into \
             what makes it work and the results speak for themselves. \
             What is your take? Share it below. #{}",
            hashtag(topic)
        )
    } else {
        let preview: String = instruction.chars().take(FALLBACK_PREVIEW_CHARS).collect();
        format!(
            "Here is a draft based on your request: \"{preview}\". \
             Connect a language model provider to receive fully generated content."
        )
    }
}

fn hashtag(topic: &str) -> String {
    let tag: String = topic.chars().filter(|c| c.is_alphanumeric()).collect();
    if tag.is_empty() {
        "writing".to_string()
    } else {
        tag
    }
}
