//! Staging and status queries.

use git2::{IndexAddOption, Repository, Status, StatusOptions};

use crate::error::GitError;

/// Stage all working-tree changes, like `git add .`.
pub fn stage_all(repo: &Repository) -> Result<(), GitError> {
    let mut index = repo.index().map_err(GitError::StagingFailed)?;
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .map_err(GitError::StagingFailed)?;
    index.write().map_err(GitError::StagingFailed)?;
    Ok(())
}

/// Count the files currently staged in the index.
pub fn staged_file_count(repo: &Repository) -> Result<usize, GitError> {
    let staged_mask = Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_DELETED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE;

    let mut opts = StatusOptions::new();
    opts.include_untracked(false);

    let statuses = repo
        .statuses(Some(&mut opts))
        .map_err(GitError::StatusFailed)?;

    Ok(statuses
        .iter()
        .filter(|entry| entry.status().intersects(staged_mask))
        .count())
}

/// Short name of the branch HEAD points at.
///
/// Falls back to "HEAD" in detached state, matching what git reports.
pub fn current_branch(repo: &Repository) -> Result<String, GitError> {
    let head = repo.head().map_err(GitError::BranchFailed)?;
    Ok(head.shorthand().unwrap_or("HEAD").to_string())
}
