//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::Theme;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Finish with a success line.
    pub fn finish_success(&self, theme: &Theme, msg: &str) {
        self.finish_with(theme.format_success(msg));
    }

    /// Finish with an error line.
    pub fn finish_error(&self, theme: &Theme, msg: &str) {
        self.finish_with(theme.format_error(msg));
    }

    /// Finish with a skipped line.
    pub fn finish_skipped(&self, theme: &Theme, msg: &str) {
        self.finish_with(theme.format_skipped(msg));
    }

    fn finish_with(&self, msg: String) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_creation() {
        let spinner = ProgressSpinner::new("Testing...");
        drop(spinner);
    }

    #[test]
    fn hidden_spinner() {
        let spinner = ProgressSpinner::hidden();
        drop(spinner);
    }

    #[test]
    fn spinner_finish_success() {
        let spinner = ProgressSpinner::new("Testing...");
        spinner.finish_success(&Theme::plain(), "Done");
    }

    #[test]
    fn spinner_set_message() {
        let spinner = ProgressSpinner::new("Initial");
        spinner.set_message("Updated");
        spinner.finish_skipped(&Theme::plain(), "Skipped");
    }
}
