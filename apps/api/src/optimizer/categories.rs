//! Category guidance: static table of category id to optimization hint.

use serde::Serialize;

/// Guidance used for any category id not in the table.
pub const FALLBACK_GUIDANCE: &str = "Optimize this prompt for better AI results.";

/// Known categories, in listing order.
pub static CATEGORY_GUIDANCE: &[(&str, &str)] = &[
    (
        "text_summarization",
        "Focus on creating a prompt that generates clear, structured summaries with key points highlighted.",
    ),
    (
        "code_generation",
        "Optimize for specific programming requirements, including language, functionality, error handling, and coding standards.",
    ),
    (
        "content_creation",
        "Enhance for engaging content with clear structure, audience considerations, and SEO optimization.",
    ),
    (
        "data_analysis",
        "Improve for comprehensive data analysis with insights, trend identification, and recommendations.",
    ),
    (
        "chatbot_response",
        "Optimize for conversational AI with tone, context awareness, and user-friendly responses.",
    ),
    (
        "creative_writing",
        "Enhance for storytelling with characters, plot structure, and vivid description.",
    ),
    (
        "email_templates",
        "Optimize for professional communication with clear purpose, tone, and call-to-action.",
    ),
    (
        "social_media",
        "Improve for engagement with hashtags, audience targeting, and shareability.",
    ),
    (
        "academic_writing",
        "Enhance for scholarly writing with proper citations, tone, and methodology.",
    ),
    (
        "marketing_copy",
        "Optimize for persuasive content with benefits, customer pain points, and conversion goals.",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
}

/// Returns the guidance sentence for `category`, or the fallback for unknown ids.
pub fn guidance_for(category: &str) -> &'static str {
    CATEGORY_GUIDANCE
        .iter()
        .find(|(id, _)| *id == category)
        .map(|(_, guidance)| *guidance)
        .unwrap_or(FALLBACK_GUIDANCE)
}

/// All known categories as `(id, human-readable name)` pairs.
pub fn list_categories() -> Vec<CategoryInfo> {
    CATEGORY_GUIDANCE
        .iter()
        .map(|(id, _)| CategoryInfo {
            id: id.to_string(),
            name: title_case(id),
        })
        .collect()
}

/// `"email_templates"` → `"Email Templates"`.
///
/// Underscores become spaces; the first letter of each run of letters is
/// uppercased and the rest lowercased, so `"gpt4o_tips"` → `"Gpt4O Tips"`.
pub fn title_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut prev_is_letter = false;
    for c in id.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
