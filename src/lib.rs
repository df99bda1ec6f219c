//! scriptor - stage, draft, review, commit, push.
//!
//! # Overview
//!
//! scriptor stages the working tree, sends the staged diff to a
//! chat-completion API to draft a commit message, optionally runs an
//! interactive review loop, commits the result, and pushes the current
//! branch. API credentials and model choice live in named profiles
//! persisted to `~/.scriptor/config.json`.

pub mod completion;
pub mod config;
pub mod error;
pub mod git;
pub mod review;
pub mod workflow;

// Re-export commonly used types
pub use completion::{CompletionClient, GenerationParams, MessageGenerator};
pub use config::{Config, Profile};
pub use error::{CompletionError, ConfigError, GitError, ReviewError, WorkflowError};
pub use review::{ReviewAction, ReviewPrompt, TerminalPrompt};
pub use workflow::{WorkflowOptions, WorkflowOutcome, run_workflow};
