//! Chat-completion API client and prompt construction.

pub mod client;
pub mod prompt;

pub use client::{CompletionClient, GenerationParams, MessageGenerator, DEFAULT_BASE_URL};
pub use prompt::{build_commit_prompt, DEFAULT_SYSTEM_MESSAGE};
