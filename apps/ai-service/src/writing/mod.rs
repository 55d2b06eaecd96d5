// Writing assistance: prompt composition, the live/mock backend switch and
// the placeholder implementations behind each endpoint.
// All provider calls go through llm_client.

pub mod backend;
pub mod composer;
pub mod documents;
pub mod generator;
pub mod grammar;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod resume;
pub mod rewriter;
pub mod summarizer;

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Approximate size of `text` in tokens: word count scaled by 4/3, rounded up.
/// Not a tokenizer count.
pub fn estimate_tokens(text: &str) -> u32 {
    let words = word_count(text) as u32;
    (words * 4).div_ceil(3)
}
