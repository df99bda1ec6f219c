//! The commit workflow: stage, diff, generate, review, commit, push.

use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::completion::MessageGenerator;
use crate::error::{GitError, WorkflowError};
use crate::git::{
    check_git_installed, collect_staged_diff, create_commit, current_branch, push_branch,
    stage_all, staged_file_count,
};
use crate::review::{ReviewPrompt, run_review};

/// Behavior flags for one workflow run, resolved from config and CLI.
pub struct WorkflowOptions {
    pub review_enabled: bool,
    pub verbose: bool,
    pub auto_push: bool,
    /// One-off push suppression from `--np`.
    pub skip_push: bool,
    pub profile_name: String,
    pub model: String,
}

/// How the workflow ended.
#[derive(Debug, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Staging produced nothing; no commit was attempted.
    NothingToCommit,
    Committed { pushed: bool },
}

/// Run the full commit workflow in the repository at `repo_path`.
pub async fn run_workflow<P, G>(
    repo_path: &Path,
    options: &WorkflowOptions,
    generator: &G,
    prompt: &mut P,
) -> Result<WorkflowOutcome, WorkflowError>
where
    P: ReviewPrompt,
    G: MessageGenerator + Sync,
{
    println!("Using model: {}", options.model);

    let repo = Repository::open(repo_path).map_err(GitError::OpenRepository)?;

    println!("Staging all changes...");
    stage_all(&repo)?;

    let staged = staged_file_count(&repo)?;
    if staged == 0 {
        println!("No changes to commit. Exiting.");
        return Ok(WorkflowOutcome::NothingToCommit);
    }
    debug!("{staged} file(s) staged");

    let diff = collect_staged_diff(&repo)?;
    let branch_name = current_branch(&repo)?;

    println!("Generating commit message...");
    let mut message = generator.generate(&diff.text, &branch_name).await?;
    println!("Commit message generated:\n{message}");

    if options.review_enabled {
        message = run_review(message, prompt, generator, &diff.text, &branch_name).await?;
    }

    println!("Committing changes...");
    let oid = create_commit(&repo, &message)?;
    debug!("Created commit {oid}");

    println!("Using profile: {}", options.profile_name);

    let pushed = if options.auto_push && !options.skip_push {
        println!("Pushing changes...");
        check_git_installed()?;
        let workdir = repo.workdir().unwrap_or(repo_path);
        push_branch(workdir, &branch_name, options.verbose)?;
        println!("Changes committed and pushed successfully!");
        true
    } else {
        println!("Changes committed successfully! (Push skipped)");
        false
    };

    Ok(WorkflowOutcome::Committed { pushed })
}
