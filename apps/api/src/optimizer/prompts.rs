// Prompt text for the optimizer. The system message lives with the LLM client.

use crate::optimizer::categories::{guidance_for, title_case};

/// Optimization instruction template.
/// Replace: {category_title}, {guidance}, {original_prompt}
pub const OPTIMIZATION_PROMPT_TEMPLATE: &str = "
Category: {category_title}
Special focus: {guidance}

Original prompt:
{original_prompt}
";

/// Composes the instruction sent to the provider for one optimize request.
pub fn build_instruction(original_prompt: &str, category: &str) -> String {
    // original_prompt goes last so placeholder-like text inside it is left alone
    OPTIMIZATION_PROMPT_TEMPLATE
        .replace("{category_title}", &title_case(category))
        .replace("{guidance}", guidance_for(category))
        .replace("{original_prompt}", original_prompt)
}
