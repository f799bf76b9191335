//! Interactive confirmation prompts.

use console::Term;

use crate::error::Result;

/// Confirmation capability.
///
/// Modeled as a trait so tests (and the `--yes` flag) can answer
/// deterministically without a real terminal.
pub trait ConfirmPrompt {
    /// Ask the user to confirm; returns `true` to proceed.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive prompt reading one line from the terminal.
///
/// Accepts a case-insensitive `y` or `yes`; any other answer declines.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConfirmPrompt for ConsolePrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let term = Term::stdout();
        term.write_str(&format!("{} ", prompt))?;

        let answer = term.read_line()?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Prompt that always answers yes, backing the `--yes` flag.
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
