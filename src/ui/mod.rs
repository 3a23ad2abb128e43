//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use console::style;

use crate::domain::{BumpKind, PreReleaseTag, Version};
use crate::error::{ReleaseError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    bump_choice_label, display_dry_run, display_error, display_publish_hint, display_status,
    display_success, display_version_change, display_warning,
};

/// Supplies values the user did not give on the command line.
///
/// Implemented by [TerminalPrompter] for real use; tests script it.
pub trait Prompter {
    /// Choose a bump kind, given the version currently in the manifest
    fn select_bump_kind(&mut self, current: &Version) -> Result<BumpKind>;

    /// Choose a prerelease tag; the result must be a valid tag
    fn select_prerelease_tag(&mut self) -> Result<String>;

    /// Enter an explicit version; the result must be a valid version
    fn input_custom_version(&mut self) -> Result<String>;

    /// Ask a yes/no question, defaulting to no
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

const PRERELEASE_CHOICES: [(&str, Option<&str>); 4] = [
    ("alpha", Some("alpha")),
    ("beta", Some("beta")),
    ("rc (Release Candidate)", Some("rc")),
    ("Other (specify)", None),
];

/// Line-based prompter over any reader/writer pair
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter reading stdin and writing stdout
    pub fn stdio() -> Self {
        TerminalPrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompter { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ReleaseError::prompt("no input available"));
        }
        Ok(line.trim().to_string())
    }

    /// Numbered single choice; Enter selects the first entry.
    fn select(&mut self, title: &str, choices: &[String]) -> Result<usize> {
        writeln!(self.output, "\n{}", style(title).bold())?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, choice)?;
        }

        let selection = self.ask(&format!(
            "\nSelect an option (1-{}) [default: 1]: ",
            choices.len()
        ))?;

        let index = if selection.is_empty() {
            1
        } else {
            selection.parse::<usize>().unwrap_or(0)
        };

        if index > 0 && index <= choices.len() {
            Ok(index - 1)
        } else {
            Err(ReleaseError::prompt(format!(
                "Invalid selection '{}'",
                selection
            )))
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select_bump_kind(&mut self, current: &Version) -> Result<BumpKind> {
        let labels: Vec<String> = BumpKind::ALL
            .iter()
            .map(|kind| bump_choice_label(*kind, current))
            .collect();

        let index = self.select(
            &format!("Select a new version (currently {})", current),
            &labels,
        )?;
        Ok(BumpKind::ALL[index])
    }

    fn select_prerelease_tag(&mut self) -> Result<String> {
        let labels: Vec<String> = PRERELEASE_CHOICES
            .iter()
            .map(|(label, _)| label.to_string())
            .collect();

        if let Some(tag) = PRERELEASE_CHOICES[self.select("Select prerelease type:", &labels)?].1 {
            return Ok(tag.to_string());
        }

        loop {
            let input = self.ask("Enter prerelease tag: ")?;
            match PreReleaseTag::parse(&input) {
                Ok(tag) => return Ok(tag.to_string()),
                Err(_) => writeln!(
                    self.output,
                    "Please enter a valid prerelease tag (alphanumeric characters and hyphens only)"
                )?,
            }
        }
    }

    fn input_custom_version(&mut self) -> Result<String> {
        loop {
            let input = self.ask("Enter the specific version (e.g., 1.2.3 or 1.2.3-alpha.1): ")?;
            if Version::is_valid(&input) {
                return Ok(input);
            }
            writeln!(
                self.output,
                "Please enter a valid version in the format x.y.z or x.y.z-prerelease"
            )?;
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let response = self.ask(&format!("\n{} (y/N): ", prompt))?.to_lowercase();
        Ok(response == "y" || response == "yes")
    }
}
