//! Semantic extraction module
//! Chunked structured extraction through an OpenAI-compatible endpoint

pub mod chunker;
pub mod client;
pub mod extractor;
pub mod prompts;
