//! Package manifest reading and version rewriting
//!
//! The manifest is a JSON object (`package.json` style) whose string
//! `version` field is the system of record. Rewrites keep every other field
//! and the key order untouched, use 2-space indentation and end with a
//! newline. The file is replaced atomically: content goes to a temporary
//! sibling which is then renamed over the original.

use crate::domain::Version;
use crate::error::{ReleaseError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const VERSION_FIELD: &str = "version";

/// A loaded manifest file
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|e| {
            ReleaseError::manifest(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(path, &content)
    }

    /// Parse manifest content that was read from `path`
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_json::from_str(content).map_err(|e| {
            ReleaseError::manifest(format!("Failed to parse JSON in {}: {}", path.display(), e))
        })?;

        match value {
            Value::Object(document) => Ok(Manifest { path, document }),
            _ => Err(ReleaseError::manifest(format!(
                "{} must contain a JSON object",
                path.display()
            ))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Package name, if the manifest declares one
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// The raw `version` string
    pub fn raw_version(&self) -> Result<&str> {
        match self.document.get(VERSION_FIELD) {
            Some(Value::String(v)) => Ok(v),
            Some(_) => Err(ReleaseError::manifest(format!(
                "'{}' in {} is not a string",
                VERSION_FIELD,
                self.path.display()
            ))),
            None => Err(ReleaseError::manifest(format!(
                "{} has no '{}' field",
                self.path.display(),
                VERSION_FIELD
            ))),
        }
    }

    /// The current version, validated against the version grammar
    pub fn version(&self) -> Result<Version> {
        Version::parse(self.raw_version()?)
    }

    /// Serialize the manifest with `version` replaced
    ///
    /// Output is deterministic: the same manifest and version always render
    /// to the same bytes.
    pub fn render_with_version(&self, version: &Version) -> Result<String> {
        let mut document = self.document.clone();
        document.insert(
            VERSION_FIELD.to_string(),
            Value::String(version.to_string()),
        );

        let mut rendered = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| ReleaseError::manifest(format!("Failed to serialize manifest: {}", e)))?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Write the manifest back to its path with `version` replaced
    pub fn write_version(&self, version: &Version) -> Result<()> {
        let rendered = self.render_with_version(version)?;
        write_atomically(&self.path, &rendered)
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let persistence = |source: std::io::Error| ReleaseError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    // Write through symlinks: replace the link target, not the link itself
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(persistence)?;
    temp.write_all(content.as_bytes()).map_err(persistence)?;
    temp.as_file().sync_all().map_err(persistence)?;

    // NamedTempFile is created 0600; keep the manifest's original mode.
    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(persistence)?;
    }

    temp.persist(&target).map_err(|e| persistence(e.error))?;
    Ok(())
}
