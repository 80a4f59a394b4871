// Shared prompt constants. Each feature that calls the LLM keeps its own
// prompts.rs alongside it; this file holds cross-cutting fragments.

/// System prompt fragment that enforces JSON-only output. Used on its own
/// for turns whose only job is to format a result (e.g. the scanner's
/// tool-result projection turn).
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
