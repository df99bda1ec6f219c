//! Error types for scriptor modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from configuration storage.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create config directory {path}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    #[error("No active profile set. Add a profile using --add-profile <name>.")]
    NoActiveProfile,

    #[error("API key is not set for the active profile. Use --set-api-key <key> to set it.")]
    MissingApiKey,
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to stage changes: {0}")]
    StagingFailed(#[source] git2::Error),

    #[error("Failed to read repository status: {0}")]
    StatusFailed(#[source] git2::Error),

    #[error("Failed to resolve current branch: {0}")]
    BranchFailed(#[source] git2::Error),

    #[error("Failed to collect staged diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),

    #[error("git executable not found on PATH. Install git to push.")]
    GitNotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    NonZeroExit { operation: String, stderr: String },
}

/// Errors from the chat-completion API.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Completion request timed out after {0} ms")]
    Timeout(u64),

    #[error("Completion API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Completion API returned an invalid response body: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    #[error("Completion API returned no choices")]
    EmptyResponse,
}

/// Errors from interactive prompts.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Prompt interaction failed: {0}")]
    PromptFailed(#[source] dialoguer::Error),

    #[error(transparent)]
    Generation(#[from] CompletionError),
}

/// Errors from the commit workflow. Each step's failure aborts the rest.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Review(#[from] ReviewError),
}
