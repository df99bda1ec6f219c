//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository in a temp directory with user config set.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        {
            let mut config = repo.config().expect("Failed to open repo config");
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create an empty initial commit so HEAD exists.
    pub fn initial_commit(&self) -> Oid {
        let sig = self.signature();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
            .expect("Failed to create initial commit")
    }

    /// Write a file into the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).expect("Failed to write file");
    }

    /// Create a branch off HEAD and check it out.
    pub fn checkout_new_branch(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &head, false).unwrap();
        self.repo
            .set_head(&format!("refs/heads/{name}"))
            .expect("Failed to switch branch");
        self.repo
            .checkout_head(Some(git2::build::CheckoutBuilder::new().force()))
            .expect("Failed to checkout branch");
    }

    /// Register a local bare repository as the `origin` remote. Returns the
    /// bare repo so tests can inspect what was pushed.
    pub fn add_bare_origin(&self) -> (tempfile::TempDir, Repository) {
        let remote_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let bare = Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");

        self.repo
            .remote("origin", remote_dir.path().to_str().unwrap())
            .expect("Failed to add origin remote");

        (remote_dir, bare)
    }

    /// Message of the commit HEAD points at.
    pub fn head_message(&self) -> String {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        head.message().unwrap().to_string()
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        let mut walk = self.repo.revwalk().unwrap();
        walk.push_head().unwrap();
        walk.count()
    }
}
