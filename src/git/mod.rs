//! Git operations using git2-rs, plus a subprocess push.

pub mod commit;
pub mod diff;
pub mod push;
pub mod stage;

pub use commit::create_commit;
pub use diff::{collect_staged_diff, StagedDiff};
pub use push::{check_git_installed, push_branch};
pub use stage::{current_branch, stage_all, staged_file_count};
