use crate::error::{ReleaseError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::fs;
use std::path::{Path, PathBuf};

/// [super::SourceControl] backed by a real repository through `git2`
///
/// The repository is discovered from `start` on every operation, so creating
/// the handle never fails; a missing repository surfaces as an error from the
/// first operation that needs it.
pub struct Git2Repository {
    start: PathBuf,
}

impl Git2Repository {
    /// Handle for the repository containing `start` (or one of its parents)
    pub fn discover_from<P: AsRef<Path>>(start: P) -> Self {
        Git2Repository {
            start: start.as_ref().to_path_buf(),
        }
    }

    fn open(&self) -> Result<Git2Repo> {
        Ok(Git2Repo::discover(&self.start)?)
    }

    /// Path of `file` relative to the repository work tree
    fn relative_to_workdir(repo: &Git2Repo, file: &Path) -> Result<PathBuf> {
        let workdir = repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("repository has no working directory"))?;

        let workdir = fs::canonicalize(workdir)?;
        let file = fs::canonicalize(file)?;

        file.strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                ReleaseError::Git(git2::Error::from_str(&format!(
                    "{} is outside the repository at {}",
                    file.display(),
                    workdir.display()
                )))
            })
    }
}

impl super::SourceControl for Git2Repository {
    fn stage(&self, path: &Path) -> Result<()> {
        let repo = self.open()?;
        let relative = Self::relative_to_workdir(&repo, path)?;

        let mut index = repo.index()?;
        index.add_path(&relative)?;
        index.write()?;

        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        let repo = self.open()?;
        let signature = repo.signature()?;

        let mut index = repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        // An unborn branch has no parent commit yet
        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };
        if parent.as_ref().is_some_and(|p| p.tree_id() == tree_id) {
            return Err(git2::Error::from_str("nothing to commit, working tree clean").into());
        }
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        let id = oid.to_string();
        Ok(id[..7.min(id.len())].to_string())
    }

    fn tag(&self, name: &str, message: Option<&str>) -> Result<()> {
        let repo = self.open()?;
        let head = repo.head()?.peel_to_commit()?;

        match message {
            Some(message) => {
                let tagger = repo.signature()?;
                repo.tag(name, head.as_object(), &tagger, message, false)?;
            }
            None => {
                repo.tag_lightweight(name, head.as_object(), false)?;
            }
        }

        Ok(())
    }
}
