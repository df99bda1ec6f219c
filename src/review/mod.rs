//! Interactive review of generated commit messages.
//!
//! The loop is driven by a closed set of actions supplied through
//! [`ReviewPrompt`], so tests can feed a scripted action sequence instead
//! of a terminal.

use dialoguer::{Input, Select};

use crate::completion::MessageGenerator;
use crate::error::ReviewError;

/// What the user wants done with the current message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    /// Accept the message as-is.
    Use,
    /// Replace the message with user-edited text.
    Refine,
    /// Ask the generator for a fresh message and review again.
    Regenerate,
}

/// Source of review decisions. Implemented by the terminal prompt and by
/// scripted doubles in tests.
pub trait ReviewPrompt {
    fn choose_action(&mut self, message: &str) -> Result<ReviewAction, ReviewError>;

    /// Free-text replacement, pre-filled with the current message. Must
    /// return non-empty text.
    fn edit_message(&mut self, current: &str) -> Result<String, ReviewError>;
}

/// Terminal-backed prompt using dialoguer.
pub struct TerminalPrompt;

impl ReviewPrompt for TerminalPrompt {
    fn choose_action(&mut self, _message: &str) -> Result<ReviewAction, ReviewError> {
        let choices = ["Use as is", "Refine", "Generate another"];
        let selection = Select::new()
            .with_prompt("What would you like to do with this commit message?")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(ReviewError::PromptFailed)?;

        Ok(match selection {
            0 => ReviewAction::Use,
            1 => ReviewAction::Refine,
            _ => ReviewAction::Regenerate,
        })
    }

    fn edit_message(&mut self, current: &str) -> Result<String, ReviewError> {
        let text: String = Input::new()
            .with_prompt("Enter the refined commit message")
            .with_initial_text(current)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("commit message must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(ReviewError::PromptFailed)?;

        Ok(text)
    }
}

/// Run the review loop until the user accepts a message.
///
/// `Use` accepts the current text, `Refine` adopts the edited text, and
/// `Regenerate` calls the generator once more with the same diff and
/// branch inputs before looping back.
pub async fn run_review<P, G>(
    initial: String,
    prompt: &mut P,
    generator: &G,
    diff: &str,
    branch_name: &str,
) -> Result<String, ReviewError>
where
    P: ReviewPrompt,
    G: MessageGenerator + Sync,
{
    let mut message = initial;

    loop {
        match prompt.choose_action(&message)? {
            ReviewAction::Use => return Ok(message),
            ReviewAction::Refine => {
                return prompt.edit_message(&message);
            }
            ReviewAction::Regenerate => {
                println!("Regenerating commit message...");
                message = generator.generate(diff, branch_name).await?;
                println!("New commit message generated:\n{message}");
            }
        }
    }
}
