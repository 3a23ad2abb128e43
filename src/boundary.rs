use std::fmt;

/// Non-fatal problems in the source-control stage of a release.
///
/// The manifest has already been written when these occur; they are reported
/// to the user and the process still succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Staging or committing the manifest failed
    CommitFailed { version: String, reason: String },
    /// Creating the version tag failed
    TagFailed { tag: String, reason: String },
    /// `--tag` was given without `--commit`
    TagWithoutCommit,
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::CommitFailed { version, reason } => {
                write!(
                    f,
                    "Error committing changes for version {}: {}",
                    version, reason
                )
            }
            ReleaseWarning::TagFailed { tag, reason } => {
                write!(f, "Error creating tag '{}': {}", tag, reason)
            }
            ReleaseWarning::TagWithoutCommit => {
                write!(f, "--tag has no effect without --commit; no tag was created")
            }
        }
    }
}
