// Skill gap analysis: document loading, skill extraction, gap computation,
// and resume suggestions. All LLM calls go through llm_client.

pub mod document;
pub mod extractor;
pub mod gap;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod skill_set;
pub mod suggestions;
