// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Closing instruction for prompts that expect a single JSON object.
pub const JSON_OBJECT_ONLY: &str = "Format the response as valid JSON only. \
    Do NOT include any text outside the JSON object.";

/// Closing instruction for prompts that expect a JSON array.
pub const JSON_ARRAY_ONLY: &str = "Return the response as a valid JSON array only. \
    Do NOT include any text outside the JSON array.";
