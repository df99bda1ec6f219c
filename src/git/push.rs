//! Push via the system `git` binary.
//!
//! Pushing shells out instead of using git2 so the user's existing
//! credential helpers, SSH agent, and remote config keep working.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::GitError;

/// Verify the `git` executable is available on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map_err(|_| GitError::GitNotInstalled)?;
    Ok(())
}

/// Push `branch` to the `origin` remote.
///
/// When `stream_output` is set, the subprocess inherits stdout/stderr so
/// progress is visible on the console; otherwise output is captured and
/// only surfaces in the error on failure.
pub fn push_branch(workdir: &Path, branch: &str, stream_output: bool) -> Result<(), GitError> {
    let operation = "push";

    if stream_output {
        let status = Command::new("git")
            .current_dir(workdir)
            .args(["push", "origin", branch])
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| GitError::SpawnFailed {
                operation: operation.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(GitError::NonZeroExit {
                operation: operation.to_string(),
                stderr: format!("exited with {status}"),
            });
        }
        Ok(())
    } else {
        let output = Command::new("git")
            .current_dir(workdir)
            .args(["push", "origin", branch])
            .output()
            .map_err(|source| GitError::SpawnFailed {
                operation: operation.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::NonZeroExit {
                operation: operation.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}
