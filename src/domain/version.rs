use crate::domain::prerelease::PreRelease;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
    )
    .unwrap()
});

/// Semantic version representation
///
/// Printed form is always `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<PreRelease>,
    pub build: Option<String>,
    /// Source digits of major, minor and patch when they differ from the
    /// canonical rendering (leading zeros)
    core_text: [Option<String>; 3],
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
            core_text: [None, None, None],
        }
    }

    /// Parse a version string (e.g., "1.2.3", "1.2.3-beta.1+build.7")
    ///
    /// The whole string must match the grammar. Nothing is trimmed, padded or
    /// prefixed: "1.2", "v1.2.3" and " 1.2.3" are all rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let caps = VERSION_RE
            .captures(raw)
            .ok_or_else(|| ReleaseError::invalid_format(raw))?;

        let numeric = |i: usize| -> Result<u64> {
            caps[i]
                .parse::<u64>()
                .map_err(|_| ReleaseError::invalid_format(raw))
        };
        let text = |i: usize, value: u64| -> Option<String> {
            let digits = &caps[i];
            (digits != value.to_string()).then(|| digits.to_string())
        };

        let prerelease = caps
            .get(4)
            .map(|m| PreRelease::parse(m.as_str()))
            .transpose()?;

        let (major, minor, patch) = (numeric(1)?, numeric(2)?, numeric(3)?);

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build: caps.get(5).map(|m| m.as_str().to_string()),
            core_text: [text(1, major), text(2, minor), text(3, patch)],
        })
    }

    /// Whether `raw` is a well-formed version string
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// This version with pre-release and build metadata stripped
    pub fn base(&self) -> Self {
        Version {
            prerelease: None,
            build: None,
            ..self.clone()
        }
    }

    /// Attach a pre-release, replacing any existing one
    pub fn with_prerelease(mut self, prerelease: PreRelease) -> Self {
        self.prerelease = Some(prerelease);
        self
    }

    /// Next major release of the numeric core: major + 1, minor = 0, patch = 0
    pub fn bump_major(&self) -> Result<Self> {
        let major = self
            .major
            .checked_add(1)
            .ok_or_else(|| ReleaseError::overflow("major", self))?;
        Ok(Version::new(major, 0, 0))
    }

    /// Next minor release of the numeric core: minor + 1, patch = 0
    ///
    /// Components that are not changed keep their source digits.
    pub fn bump_minor(&self) -> Result<Self> {
        let minor = self
            .minor
            .checked_add(1)
            .ok_or_else(|| ReleaseError::overflow("minor", self))?;
        Ok(Version {
            core_text: [self.core_text[0].clone(), None, None],
            ..Version::new(self.major, minor, 0)
        })
    }

    /// Next patch release of the numeric core: patch + 1
    pub fn bump_patch(&self) -> Result<Self> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| ReleaseError::overflow("patch", self))?;
        Ok(Version {
            core_text: [self.core_text[0].clone(), self.core_text[1].clone(), None],
            ..Version::new(self.major, self.minor, patch)
        })
    }

    /// Convert to a `semver::Version` for precedence comparisons
    ///
    /// Fails for strings the grammar accepts but semver.org forbids, such as
    /// leading zeros in the numeric core or in numeric pre-release identifiers.
    pub fn to_semver(&self) -> Result<semver::Version> {
        semver::Version::parse(&self.to_string())
            .map_err(|e| ReleaseError::invalid_format(format!("{} ({})", self, e)))
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in [self.major, self.minor, self.patch].into_iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match &self.core_text[i] {
                Some(text) => f.write_str(text)?,
                None => write!(f, "{}", value)?,
            }
        }
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Standard semver precedence; versions semver cannot represent are incomparable
impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let lhs = self.to_semver().ok()?;
        let rhs = other.to_semver().ok()?;
        Some(lhs.cmp(&rhs))
    }
}
