//! Prompt construction for commit message generation.

/// System instruction used when the active profile has none configured.
///
/// The output constraints matter downstream: the generated text is handed
/// to git verbatim, so quotes, backticks, and bracketed markers in the
/// message would break anything that later re-parses it.
pub const DEFAULT_SYSTEM_MESSAGE: &str = r#"Objective:
Assist developers by analyzing the pending modifications in a Git repository and producing a meaningful commit message.

Instructions:

1. Identify Changes:
   - Analyze the staged changes in the repository.
   - Identify all modified, added, deleted, or renamed files.
   - For each file, determine the type of change (added lines, removed lines, modified lines).

2. Classify Changes:
   - Categorize the changes into relevant sections such as:
     - Features: New features added.
     - Bugfixes: Bugs fixed.
     - Refactoring: Code improvements without changing functionality.
     - Documentation: Changes to comments, README files, or other documentation.
     - Testing: Additions or modifications to tests.
     - Chores: Maintenance tasks like updating dependencies.

3. Generate Commit Message:
   - Write a concise commit message following conventional commit guidelines:
     - Header: a short summary of the changes (max 50 characters). Do not end with a period and do not include the branch name.
     - Body (optional): a more detailed explanation if necessary (wrap at 72 characters).
     - Footer (optional): references to issues closed or other important notes. Leave empty if no issues are associated with the branch.
   - Avoid bracketed markers like [example] or [/example] in the commit message, as they interfere with commit message parsing.
   - Avoid quote characters (' and " and `) in the commit message, as they interfere with commit message parsing.

Output:
Reply only with the commit message, without any additional information.

Considerations:
- Ensure the commit message is self-explanatory so other developers understand the changes without reading the code.
- If there are multiple types of changes, separate each type clearly in the body.
- Use imperative mood (write "fix bug", not "fixed bug")."#;

/// Build the user prompt embedding the staged diff and the branch name.
pub fn build_commit_prompt(diff: &str, branch_name: &str) -> String {
    format!(
        r#"Write a commit message in English summarizing the following changes:
{diff}
If the branch name contains an issue ID, include it in the commit message. The branch name is "{branch_name}".
Format the commit message according to git best practices."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_diff_and_branch() {
        let prompt = build_commit_prompt("+foo\n-bar\n", "feature/JIRA-42-thing");

        assert!(prompt.contains("+foo\n-bar\n"));
        assert!(prompt.contains(r#"The branch name is "feature/JIRA-42-thing""#));
        assert!(prompt.contains("issue ID"));
        assert!(prompt.contains("git best practices"));
    }

    #[test]
    fn test_default_system_message_constraints() {
        assert!(DEFAULT_SYSTEM_MESSAGE.contains("max 50 characters"));
        assert!(DEFAULT_SYSTEM_MESSAGE.contains("wrap at 72 characters"));
        assert!(DEFAULT_SYSTEM_MESSAGE.contains("[example]"));
        assert!(DEFAULT_SYSTEM_MESSAGE.contains("imperative mood"));
        assert!(DEFAULT_SYSTEM_MESSAGE.contains("Reply only with the commit message"));
    }
}
