// Portfolio generation pipeline.
// Implements: style resolution, prompt building, completion parsing/validation,
// document assembly. All LLM calls go through llm_client; no direct API calls here.

pub mod assembler;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod response_parser;
pub mod schema;
pub mod style_catalog;
