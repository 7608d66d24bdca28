// Vocational (Ikigai) reports: generation from peer reviews, history, PDF export.
// All LLM calls go through llm_client; all layout goes through layout::render.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod prompts;
