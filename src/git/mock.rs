use crate::error::{ReleaseError, Result};
use crate::git::SourceControl;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// A source-control call recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Stage(PathBuf),
    Commit(String),
    Tag {
        name: String,
        message: Option<String>,
    },
}

/// Mock repository for testing without actual git operations
///
/// Records every call, including failed ones, and can be told to fail a
/// specific operation.
#[derive(Debug, Default)]
pub struct MockRepository {
    calls: RefCell<Vec<GitCall>>,
    fail_stage: bool,
    fail_commit: bool,
    fail_tag: bool,
}

impl MockRepository {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_stage(mut self) -> Self {
        self.fail_stage = true;
        self
    }

    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn failing_tag(mut self) -> Self {
        self.fail_tag = true;
        self
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: GitCall, fail: bool, what: &str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if fail {
            Err(ReleaseError::Git(git2::Error::from_str(&format!(
                "mock {} failure",
                what
            ))))
        } else {
            Ok(())
        }
    }
}

impl SourceControl for MockRepository {
    fn stage(&self, path: &Path) -> Result<()> {
        self.record(GitCall::Stage(path.to_path_buf()), self.fail_stage, "stage")
    }

    fn commit(&self, message: &str) -> Result<String> {
        self.record(
            GitCall::Commit(message.to_string()),
            self.fail_commit,
            "commit",
        )?;
        Ok("abc1234".to_string())
    }

    fn tag(&self, name: &str, message: Option<&str>) -> Result<()> {
        self.record(
            GitCall::Tag {
                name: name.to_string(),
                message: message.map(str::to_string),
            },
            self.fail_tag,
            "tag",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls_in_order() {
        let repo = MockRepository::new();
        repo.stage(Path::new("package.json")).unwrap();
        assert_eq!(repo.commit("msg").unwrap(), "abc1234");
        repo.tag("v1.0.0", None).unwrap();

        assert_eq!(
            repo.calls(),
            vec![
                GitCall::Stage(PathBuf::from("package.json")),
                GitCall::Commit("msg".to_string()),
                GitCall::Tag {
                    name: "v1.0.0".to_string(),
                    message: None
                },
            ]
        );
    }

    #[test]
    fn test_mock_failures() {
        let repo = MockRepository::new().failing_commit();
        assert!(repo.stage(Path::new("package.json")).is_ok());
        assert!(repo.commit("msg").is_err());
        assert_eq!(repo.calls().len(), 2);

        let repo = MockRepository::new().failing_tag();
        assert!(repo.tag("v1.0.0", Some("Release")).is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.calls().is_empty());
    }
}
