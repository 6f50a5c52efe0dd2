// Financial plan core: request validation, prompt building, response
// parsing, and the deterministic savings math behind the charts.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod budget;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod projection;
pub mod prompts;
pub mod sectionizer;
