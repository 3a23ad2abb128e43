//! Pre-release identifiers for semantic versions
//!
//! A pre-release is the dot-separated list of identifiers after the `-` in a
//! version (`1.2.0-beta.3` -> `beta`, `3`). When it has exactly the shape
//! `tag.counter` it forms a lineage that the `prerelease` bump continues.
//! According to semver.org: https://semver.org/#spec-item-9

use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Returns true if `s` is a non-empty run of `[0-9A-Za-z-]`
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// A validated pre-release tag such as `alpha`, `beta`, `rc` or `nightly-x`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreReleaseTag(String);

impl PreReleaseTag {
    /// Tag used by the premajor, preminor and prepatch bumps
    pub const ALPHA: &'static str = "alpha";

    /// Parse a tag, accepting only alphanumeric characters and hyphens
    ///
    /// Matching is exact: no lowercasing, no aliases.
    pub fn parse(s: &str) -> Result<Self> {
        if is_identifier(s) {
            Ok(PreReleaseTag(s.to_string()))
        } else {
            Err(ReleaseError::InvalidPrereleaseTag(s.to_string()))
        }
    }

    pub fn alpha() -> Self {
        PreReleaseTag(Self::ALPHA.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PreReleaseTag {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PreReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pre-release part of a version
///
/// # Examples
/// - "beta.1" -> identifiers ["beta", "1"], lineage ("beta", 1)
/// - "rc" -> identifiers ["rc"], no lineage
/// - "alpha.beta.1" -> identifiers ["alpha", "beta", "1"], no lineage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<String>,
}

impl PreRelease {
    /// Create the lineage pre-release `tag.counter`
    pub fn new(tag: &PreReleaseTag, counter: u64) -> Self {
        PreRelease {
            identifiers: vec![tag.as_str().to_string(), counter.to_string()],
        }
    }

    /// Parse the text after `-` in a version
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - All identifiers match `[0-9A-Za-z-]+`
    /// * `Err` - Empty input or an invalid identifier
    pub fn parse(s: &str) -> Result<Self> {
        let identifiers: Vec<String> = s.split('.').map(str::to_string).collect();
        if !identifiers.iter().all(|id| is_identifier(id)) {
            return Err(ReleaseError::invalid_format(format!("-{}", s)));
        }

        Ok(PreRelease { identifiers })
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// The `(tag, counter)` pair when this pre-release has exactly that shape
    pub fn lineage(&self) -> Option<(&str, u64)> {
        match self.identifiers.as_slice() {
            [tag, counter] if counter.chars().all(|c| c.is_ascii_digit()) => {
                counter.parse::<u64>().ok().map(|n| (tag.as_str(), n))
            }
            _ => None,
        }
    }

    /// The next pre-release in the lineage of `tag`
    ///
    /// Continues the counter when this pre-release belongs to the same lineage,
    /// otherwise starts a new lineage at 0.
    pub fn next_in_lineage(current: Option<&PreRelease>, tag: &PreReleaseTag) -> Result<Self> {
        match current.and_then(PreRelease::lineage) {
            Some((current_tag, counter)) if current_tag == tag.as_str() => {
                let next = counter
                    .checked_add(1)
                    .ok_or_else(|| ReleaseError::overflow("prerelease", tag))?;
                Ok(PreRelease::new(tag, next))
            }
            _ => Ok(PreRelease::new(tag, 0)),
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifiers.join("."))
    }
}
