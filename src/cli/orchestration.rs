//! Main workflow orchestration logic
//!
//! The `version` and `publish` workflows live here rather than in main.rs so
//! they can be driven programmatically with fake source control, prompts and
//! publishers. main.rs only parses arguments and builds the real
//! collaborators.

use std::path::PathBuf;

use crate::cli::request::complete_request;
use crate::config::Config;
use crate::error::Result;
use crate::git::SourceControl;
use crate::manifest::Manifest;
use crate::publish::Publisher;
use crate::sequencer::{ReleaseOutcome, ReleaseSequencer, SequencerOptions};
use crate::ui::{self, Prompter};

/// Arguments for the version workflow
///
/// Mirrors the CLI arguments without depending on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionWorkflowArgs {
    /// Bump keyword or explicit version; prompted for when absent
    pub kind: Option<String>,

    /// Prerelease tag for `prerelease`, explicit version for `custom`
    pub extra: Option<String>,

    /// Preview mode - don't touch the manifest or the repository
    pub dry_run: bool,

    /// Commit the updated manifest
    pub commit: bool,

    /// Tag the release commit
    pub tag: bool,
}

impl VersionWorkflowArgs {
    fn options(&self) -> SequencerOptions {
        SequencerOptions {
            dry_run: self.dry_run,
            commit: self.commit,
            tag: self.tag,
        }
    }
}

/// Arguments for the publish workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishWorkflowArgs {
    pub version: VersionWorkflowArgs,

    /// Skip the confirmation prompt
    pub yes: bool,

    /// Extra arguments passed through to the publish command
    pub publish_args: Vec<String>,
}

/// How a publish workflow ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStatus {
    DryRun,
    Cancelled,
    Published,
}

/// Result of a successful publish workflow
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub outcome: ReleaseOutcome,
    pub status: PublishStatus,
}

/// Collaborators shared by both workflows
pub struct WorkflowContext<'a> {
    pub manifest_path: PathBuf,
    pub config: &'a Config,
    pub source_control: &'a dyn SourceControl,
}

/// Version workflow
///
/// 1. Load the manifest and its current version
/// 2. Fill in the bump request, prompting for anything missing
/// 3. Resolve, persist, commit and tag
/// 4. Report the change, any warnings and how to publish
pub fn run_version_workflow(
    args: &VersionWorkflowArgs,
    ctx: &WorkflowContext<'_>,
    prompter: &mut dyn Prompter,
) -> Result<ReleaseOutcome> {
    let outcome = release(args, ctx, prompter)?;

    if !args.dry_run {
        let publish = &ctx.config.publish;
        let command_line = std::iter::once(publish.command.as_str())
            .chain(publish.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        ui::display_publish_hint(&command_line);
    }

    Ok(outcome)
}

/// Publish workflow
///
/// Runs the version workflow, then publishes once the user confirms. A dry
/// run or a declined confirmation stops before the publisher is called.
pub fn run_publish_workflow(
    args: &PublishWorkflowArgs,
    ctx: &WorkflowContext<'_>,
    prompter: &mut dyn Prompter,
    publisher: &dyn Publisher,
) -> Result<PublishResult> {
    let outcome = release(&args.version, ctx, prompter)?;

    if args.version.dry_run {
        ui::display_status(&format!(
            "Would run: {}",
            publisher.describe(&args.publish_args)
        ));
        return Ok(PublishResult {
            outcome,
            status: PublishStatus::DryRun,
        });
    }

    if !args.yes {
        let manifest = Manifest::load(&ctx.manifest_path)?;
        let name = manifest.name().unwrap_or("this package");
        let question = format!(
            "Are you sure you want to publish {}@{}?",
            name, outcome.version
        );

        if !prompter.confirm(&question)? {
            ui::display_status("Publish cancelled by user.");
            return Ok(PublishResult {
                outcome,
                status: PublishStatus::Cancelled,
            });
        }
    }

    ui::display_status(&format!(
        "Running: {}",
        publisher.describe(&args.publish_args)
    ));
    publisher.publish(&args.publish_args)?;
    ui::display_success(&format!("Published version {}", outcome.version));

    Ok(PublishResult {
        outcome,
        status: PublishStatus::Published,
    })
}

fn release(
    args: &VersionWorkflowArgs,
    ctx: &WorkflowContext<'_>,
    prompter: &mut dyn Prompter,
) -> Result<ReleaseOutcome> {
    let sequencer = ReleaseSequencer::new(ctx.source_control, &ctx.config.git)?;

    let manifest = Manifest::load(&ctx.manifest_path)?;
    let current = manifest.version()?;
    ui::display_status(&format!("Current version: {}", current));

    let request = complete_request(
        current,
        args.kind.as_deref(),
        args.extra.as_deref(),
        prompter,
    )?;

    let outcome = sequencer.run(&manifest, &request, args.options())?;
    ui::display_version_change(&outcome.previous, &outcome.version);

    if args.dry_run {
        let tag = if args.commit && args.tag {
            Some(ctx.config.git.tag_pattern()?.format(&outcome.version))
        } else {
            None
        };
        ui::display_dry_run(&outcome.version, args.commit, tag.as_deref());
        return Ok(outcome);
    }

    ui::display_success(&format!(
        "Updated {} to version {}",
        manifest.path().display(),
        outcome.version
    ));
    if let Some(commit) = &outcome.commit {
        ui::display_success(&format!("Committed changes ({})", commit));
    }
    if let Some(tag) = &outcome.tag {
        ui::display_success(&format!("Created tag {}", tag));
    }
    for warning in &outcome.warnings {
        ui::display_warning(warning);
    }

    Ok(outcome)
}
