//! Version resolution - computes the next version for a bump request
//!
//! [resolve] is pure: no I/O, no prompts, same output for the same request.
//! Missing inputs (prerelease tag, custom version) must be filled in by the
//! caller before resolving.

use crate::domain::{BumpKind, PreRelease, PreReleaseTag, Version};
use crate::error::{ReleaseError, Result};

/// A fully populated request to compute the next version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Version currently recorded in the manifest
    pub current: Version,
    /// Requested transition
    pub kind: BumpKind,
    /// Tag for the `prerelease` kind; ignored by every other kind
    pub prerelease_tag: Option<String>,
    /// Target version for the `custom` kind; ignored by every other kind
    pub explicit_version: Option<String>,
}

impl ResolutionRequest {
    pub fn new(current: Version, kind: BumpKind) -> Self {
        ResolutionRequest {
            current,
            kind,
            prerelease_tag: None,
            explicit_version: None,
        }
    }

    pub fn with_prerelease_tag(mut self, tag: impl Into<String>) -> Self {
        self.prerelease_tag = Some(tag.into());
        self
    }

    pub fn with_explicit_version(mut self, version: impl Into<String>) -> Self {
        self.explicit_version = Some(version.into());
        self
    }
}

/// Compute the next version for a request
///
/// | kind | result |
/// |---|---|
/// | major / minor / patch | numeric bump of the current core, no pre-release |
/// | premajor / preminor / prepatch | same numeric bump, then `-alpha.0` |
/// | prerelease | current core unchanged, lineage continued or restarted at 0 |
/// | custom | the explicit version, validated |
///
/// # Errors
/// * `MissingPrereleaseTag` / `InvalidPrereleaseTag` - `prerelease` without a usable tag
/// * `MissingExplicitVersion` / `InvalidFormat` - `custom` without a usable version
/// * `VersionOverflow` - a numeric component would exceed `u64::MAX`
pub fn resolve(request: &ResolutionRequest) -> Result<Version> {
    let base = request.current.base();

    match request.kind {
        BumpKind::Major => base.bump_major(),
        BumpKind::Minor => base.bump_minor(),
        BumpKind::Patch => base.bump_patch(),
        BumpKind::PreMajor => Ok(base.bump_major()?.with_prerelease(first_alpha())),
        BumpKind::PreMinor => Ok(base.bump_minor()?.with_prerelease(first_alpha())),
        BumpKind::PrePatch => Ok(base.bump_patch()?.with_prerelease(first_alpha())),
        BumpKind::PreRelease => {
            let tag = request
                .prerelease_tag
                .as_deref()
                .ok_or(ReleaseError::MissingPrereleaseTag)?;
            let tag = PreReleaseTag::parse(tag)?;

            // Numeric core stays as-is
            let prerelease = PreRelease::next_in_lineage(request.current.prerelease.as_ref(), &tag)?;
            Ok(base.with_prerelease(prerelease))
        }
        BumpKind::Custom => {
            let explicit = request
                .explicit_version
                .as_deref()
                .ok_or(ReleaseError::MissingExplicitVersion)?;
            Version::parse(explicit)
        }
    }
}

fn first_alpha() -> PreRelease {
    PreRelease::new(&PreReleaseTag::alpha(), 0)
}

/// Preview of what a kind would produce, for the interactive selector
///
/// Returns `None` for kinds that need more input (`prerelease`, `custom`) or
/// that cannot be applied to `current`.
pub fn preview(current: &Version, kind: BumpKind) -> Option<Version> {
    match kind {
        BumpKind::PreRelease | BumpKind::Custom => None,
        _ => resolve(&ResolutionRequest::new(current.clone(), kind)).ok(),
    }
}
