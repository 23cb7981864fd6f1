pub mod engine;
pub mod error;
pub mod protocol;

pub mod gemini_client;
pub mod plan_decode;
pub mod prompt_builder;
