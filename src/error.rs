use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for pkg-bump operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version format: '{0}' - expected MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]")]
    InvalidFormat(String),

    #[error(
        "Invalid version type: '{0}'. Valid types: major, minor, patch, premajor, preminor, \
         prepatch, prerelease, custom or a specific version (e.g., 1.2.3)"
    )]
    UnknownBumpKind(String),

    #[error("Invalid prerelease tag: '{0}' - alphanumeric characters and hyphens only")]
    InvalidPrereleaseTag(String),

    #[error("A prerelease tag is required for a prerelease bump")]
    MissingPrereleaseTag,

    #[error("A custom bump requires an explicit version")]
    MissingExplicitVersion,

    #[error("Version overflow: cannot increment {component} component of {version}")]
    VersionOverflow { component: String, version: String },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Failed to write manifest {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Prompt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pkg-bump
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a format error for a rejected version string
    pub fn invalid_format(raw: impl Into<String>) -> Self {
        ReleaseError::InvalidFormat(raw.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Create a publish error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        ReleaseError::Publish(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create an input error with context
    pub fn prompt(msg: impl Into<String>) -> Self {
        ReleaseError::Prompt(msg.into())
    }

    /// Create an overflow error for a component that cannot be incremented
    pub fn overflow(component: &str, version: impl ToString) -> Self {
        ReleaseError::VersionOverflow {
            component: component.to_string(),
            version: version.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_format_names_input() {
        let err = ReleaseError::invalid_format("1.2");
        assert!(err.to_string().contains("'1.2'"));
        assert!(err.to_string().contains("MAJOR.MINOR.PATCH"));
    }

    #[test]
    fn test_unknown_bump_kind_lists_valid_types() {
        let err = ReleaseError::UnknownBumpKind("huge".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'huge'"));
        assert!(msg.contains("prerelease"));
        assert!(msg.contains("1.2.3"));
    }

    #[test]
    fn test_persistence_error_names_path() {
        let err = ReleaseError::Persistence {
            path: PathBuf::from("/tmp/package.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/package.json"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_overflow_message() {
        let err = ReleaseError::overflow("major", "18446744073709551615.0.0");
        assert!(err.to_string().contains("major"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::manifest("x"), "Manifest error"),
            (ReleaseError::publish("x"), "Publish failed"),
            (ReleaseError::prompt("x"), "Input error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
