// Shared prompt constants.
// Each writing operation keeps its own prompts in writing/prompts.rs;
// this file holds the cross-cutting fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every plain-text system prompt.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "Return only the requested text, \
    without preamble, commentary or surrounding quotes.";
