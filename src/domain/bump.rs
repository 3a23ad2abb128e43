use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Kind of version transition requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
    Custom,
}

impl BumpKind {
    /// Every kind, in the order offered by the interactive selector
    pub const ALL: [BumpKind; 8] = [
        BumpKind::Patch,
        BumpKind::Minor,
        BumpKind::Major,
        BumpKind::PrePatch,
        BumpKind::PreMinor,
        BumpKind::PreMajor,
        BumpKind::PreRelease,
        BumpKind::Custom,
    ];

    /// The keyword accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::PreMajor => "premajor",
            BumpKind::PreMinor => "preminor",
            BumpKind::PrePatch => "prepatch",
            BumpKind::PreRelease => "prerelease",
            BumpKind::Custom => "custom",
        }
    }

    /// Whether the kind produces a pre-release version
    pub fn is_pre(&self) -> bool {
        matches!(
            self,
            BumpKind::PreMajor | BumpKind::PreMinor | BumpKind::PrePatch | BumpKind::PreRelease
        )
    }
}

impl FromStr for BumpKind {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        BumpKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ReleaseError::UnknownBumpKind(s.to_string()))
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
