//! Staged diff collection using git2.

use git2::{Diff, DiffFormat, ErrorCode, Repository, Tree};
use tracing::warn;

use crate::error::GitError;

/// Maximum characters of unified diff text sent to the completion API.
const MAX_DIFF_LENGTH: usize = 100_000;

/// The staged diff text plus a truncation marker.
#[derive(Debug, Clone)]
pub struct StagedDiff {
    pub text: String,
    pub truncated: bool,
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found),
/// `Ok(Some(tree))` for repos with a valid HEAD.
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, GitError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(GitError::DiffFailed(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(GitError::DiffFailed)?;
    Ok(Some(tree))
}

/// Collect the textual diff between HEAD and the index (staged changes only),
/// equivalent to `git diff --cached`.
pub fn collect_staged_diff(repo: &Repository) -> Result<StagedDiff, GitError> {
    let head_tree = resolve_head_tree(repo)?;

    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(GitError::DiffFailed)?;

    Ok(render_diff_text(&diff))
}

/// Assemble unified diff text from a diff object, respecting the max length.
fn render_diff_text(diff: &Diff<'_>) -> StagedDiff {
    let mut text = String::new();
    let mut truncated = false;

    if let Err(e) = diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if truncated {
            return true;
        }

        let content = std::str::from_utf8(line.content()).unwrap_or("");

        if text.len() + content.len() + 2 > MAX_DIFF_LENGTH {
            truncated = true;
            return true;
        }

        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(content);

        true
    }) {
        warn!("Failed to collect diff text: {e}");
        truncated = true;
    }

    if truncated {
        text.push_str("\n[diff truncated due to size]\n");
    }

    StagedDiff { text, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use std::path::Path;

    fn init_repo_with_commit() -> (tempfile::TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        let sig = Signature::now("Test", "test@test.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
            .unwrap();
        drop(tree);

        (dir, repo)
    }

    fn stage(repo: &Repository, name: &str) {
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    #[test]
    fn test_staged_diff_empty_on_clean_repo() {
        let (_dir, repo) = init_repo_with_commit();
        let diff = collect_staged_diff(&repo).unwrap();
        assert!(diff.text.is_empty());
        assert!(!diff.truncated);
    }

    #[test]
    fn test_staged_diff_contains_staged_content() {
        let (dir, repo) = init_repo_with_commit();
        std::fs::write(dir.path().join("foo.txt"), "foo line\n").unwrap();
        stage(&repo, "foo.txt");

        let diff = collect_staged_diff(&repo).unwrap();
        assert!(diff.text.contains("+foo line"));
        assert!(!diff.truncated);
    }

    #[test]
    fn test_unstaged_changes_are_excluded() {
        let (dir, repo) = init_repo_with_commit();
        std::fs::write(dir.path().join("staged.txt"), "staged\n").unwrap();
        stage(&repo, "staged.txt");
        // Written but never added to the index
        std::fs::write(dir.path().join("unstaged.txt"), "unstaged\n").unwrap();

        let diff = collect_staged_diff(&repo).unwrap();
        assert!(diff.text.contains("staged"));
        assert!(!diff.text.contains("unstaged\n"));
    }

    #[test]
    fn test_staged_diff_on_empty_repo_uses_empty_head() {
        // No commits yet: head tree is None and the diff is index-vs-nothing
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        std::fs::write(dir.path().join("first.txt"), "first\n").unwrap();
        stage(&repo, "first.txt");

        let diff = collect_staged_diff(&repo).unwrap();
        assert!(diff.text.contains("+first"));
    }

    #[test]
    fn test_oversized_diff_is_truncated() {
        let (dir, repo) = init_repo_with_commit();
        let big = "x".repeat(200) + "\n";
        let content: String = std::iter::repeat(big.as_str()).take(1_000).collect();
        std::fs::write(dir.path().join("big.txt"), &content).unwrap();
        stage(&repo, "big.txt");

        let diff = collect_staged_diff(&repo).unwrap();
        assert!(diff.truncated);
        assert!(diff.text.len() <= MAX_DIFF_LENGTH + 64);
        assert!(diff.text.contains("[diff truncated due to size]"));
    }
}
