//! Registry publishing
//!
//! Publishing is an injected capability so the publish workflow can be
//! exercised without spawning the real registry client.

use crate::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Publishes the package to its registry
pub trait Publisher {
    /// Publish with extra arguments appended to the configured command
    fn publish(&self, args: &[String]) -> Result<()>;

    /// Human-readable command line for `args`, shown before publishing
    fn describe(&self, args: &[String]) -> String;
}

/// Publishes by running an external command such as `npm publish`
#[derive(Debug, Clone)]
pub struct CommandPublisher {
    program: String,
    base_args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandPublisher {
    /// # Arguments
    /// * `program` - Executable to run (e.g., "npm")
    /// * `base_args` - Arguments always passed first (e.g., ["publish"])
    /// * `working_dir` - Directory the command runs in, normally the manifest's
    pub fn new(
        program: impl Into<String>,
        base_args: Vec<String>,
        working_dir: impl AsRef<Path>,
    ) -> Self {
        CommandPublisher {
            program: program.into(),
            base_args,
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }
}

impl Publisher for CommandPublisher {
    fn publish(&self, args: &[String]) -> Result<()> {
        let command_line = self.describe(args);

        // stdio is inherited so the registry client can prompt (e.g. for an OTP)
        let status = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .current_dir(&self.working_dir)
            .status()
            .map_err(|e| {
                ReleaseError::publish(format!("Failed to run `{}`: {}", command_line, e))
            })?;

        if !status.success() {
            return Err(ReleaseError::publish(format!(
                "`{}` failed with exit code {}",
                command_line,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    fn describe(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.base_args.iter().map(String::as_str))
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
