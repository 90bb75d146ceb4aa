// Prompt text for the Emergent chat session. Gemini receives the instruction alone.

/// System message for the chat session. Kept short so the model returns the
/// rewritten prompt with no preamble.
pub const OPTIMIZER_SYSTEM: &str =
    "You are an expert prompt optimizer. Return ONLY the optimized prompt.";

/// Chat session identifier sent with every Emergent request.
pub const SESSION_ID: &str = "prompt_optimizer";
