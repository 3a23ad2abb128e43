//! Source-control abstraction layer
//!
//! The release sequence only needs three operations from source control:
//! stage the manifest, commit it, and tag the commit. They are expressed by
//! the [SourceControl] trait so the sequencer can run against either:
//!
//! - [repository::Git2Repository]: a real repository driven through `git2`
//! - [mock::MockRepository]: an in-memory recorder for tests
//!
//! ```rust
//! # use pkg_bump::git::SourceControl;
//! # use std::path::Path;
//! # fn example(repo: &dyn SourceControl) -> pkg_bump::Result<()> {
//! repo.stage(Path::new("package.json"))?;
//! let commit = repo.commit("Bump version to 1.2.4")?;
//! repo.tag("v1.2.4", None)?;
//! # let _ = commit;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::{GitCall, MockRepository};
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Source-control operations used by the release sequence
///
/// All methods return [crate::error::Result]; implementations map their
/// underlying errors (like `git2::Error`) into [crate::error::ReleaseError].
pub trait SourceControl {
    /// Stage a file for the next commit
    ///
    /// # Arguments
    /// * `path` - File to stage; relative paths are resolved against the
    ///   process working directory
    fn stage(&self, path: &Path) -> Result<()>;

    /// Commit the staged changes on the current branch
    ///
    /// # Returns
    /// * `Ok(String)` - Abbreviated id of the new commit
    /// * `Err` - If there is no usable identity, HEAD is invalid, or git fails
    fn commit(&self, message: &str) -> Result<String>;

    /// Tag the current HEAD commit
    ///
    /// # Arguments
    /// * `name` - Tag name (e.g., "v1.2.4")
    /// * `message` - `Some` creates an annotated tag, `None` a lightweight one
    ///
    /// # Returns
    /// * `Err` - If the tag already exists or git fails
    fn tag(&self, name: &str, message: Option<&str>) -> Result<()>;
}
