// Prompt optimization: category guidance, instruction building, the optimize
// operation, and the history log it writes to.
// All provider calls go through llm_client.

pub mod categories;
pub mod handlers;
pub mod prompts;
pub mod service;
