//! Release sequencing: resolve, persist, then commit and tag
//!
//! Stages run strictly in order and each completes before the next starts.
//! Resolution and persistence failures are fatal and returned as errors;
//! source-control failures are collected as [ReleaseWarning]s and never undo
//! the manifest write.

use crate::boundary::ReleaseWarning;
use crate::config::GitConfig;
use crate::domain::{TagPattern, Version};
use crate::error::Result;
use crate::git::SourceControl;
use crate::manifest::Manifest;
use crate::resolver::{resolve, ResolutionRequest};

/// Which optional stages to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerOptions {
    /// Compute and report only
    pub dry_run: bool,
    /// Stage and commit the manifest
    pub commit: bool,
    /// Tag the commit; only honored together with `commit`
    pub tag: bool,
}

/// What a release sequence did
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    pub previous: Version,
    pub version: Version,
    /// Whether the manifest was rewritten
    pub persisted: bool,
    /// Abbreviated id of the release commit
    pub commit: Option<String>,
    /// Name of the created tag
    pub tag: Option<String>,
    pub warnings: Vec<ReleaseWarning>,
}

impl ReleaseOutcome {
    fn new(previous: Version, version: Version) -> Self {
        ReleaseOutcome {
            previous,
            version,
            persisted: false,
            commit: None,
            tag: None,
            warnings: Vec::new(),
        }
    }
}

/// Runs the release stages against one manifest
pub struct ReleaseSequencer<'a> {
    source_control: &'a dyn SourceControl,
    git: GitConfig,
    tag_pattern: TagPattern,
}

impl<'a> ReleaseSequencer<'a> {
    /// # Errors
    /// Fails if the configured tag pattern is invalid, so a bad pattern is
    /// caught before the manifest is touched.
    pub fn new(source_control: &'a dyn SourceControl, git: &GitConfig) -> Result<Self> {
        Ok(ReleaseSequencer {
            source_control,
            tag_pattern: git.tag_pattern()?,
            git: git.clone(),
        })
    }

    /// Run the sequence for `request` against `manifest`
    ///
    /// `request.current` is expected to be the manifest's own version.
    pub fn run(
        &self,
        manifest: &Manifest,
        request: &ResolutionRequest,
        options: SequencerOptions,
    ) -> Result<ReleaseOutcome> {
        let version = resolve(request)?;
        let mut outcome = ReleaseOutcome::new(request.current.clone(), version.clone());

        if options.dry_run {
            return Ok(outcome);
        }

        manifest.write_version(&version)?;
        outcome.persisted = true;

        if options.commit {
            self.commit_and_tag(manifest, &version, options.tag, &mut outcome);
        } else if options.tag {
            outcome.warnings.push(ReleaseWarning::TagWithoutCommit);
        }

        Ok(outcome)
    }

    fn commit_and_tag(
        &self,
        manifest: &Manifest,
        version: &Version,
        tag: bool,
        outcome: &mut ReleaseOutcome,
    ) {
        let message = self.git.commit_message(version);
        let committed = self
            .source_control
            .stage(manifest.path())
            .and_then(|_| self.source_control.commit(&message));

        match committed {
            Ok(id) => outcome.commit = Some(id),
            Err(e) => {
                // Nothing to tag without the release commit
                outcome.warnings.push(ReleaseWarning::CommitFailed {
                    version: version.to_string(),
                    reason: e.to_string(),
                });
                return;
            }
        }

        if !tag {
            return;
        }

        let name = self.tag_pattern.format(version);
        let annotation = self
            .git
            .annotated_tags
            .then(|| format!("Release {}", name));

        match self.source_control.tag(&name, annotation.as_deref()) {
            Ok(()) => outcome.tag = Some(name),
            Err(e) => outcome.warnings.push(ReleaseWarning::TagFailed {
                tag: name,
                reason: e.to_string(),
            }),
        }
    }
}
