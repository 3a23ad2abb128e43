use crate::domain::{TagPattern, Version};
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "pkgbump.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE_NAME: &str = ".pkgbump.toml";

/// Represents the complete configuration for pkg-bump.
///
/// Contains the manifest location, source-control conventions and the
/// registry publish command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_commit_message() -> String {
    "Bump version to {version}".to_string()
}

fn default_publish_command() -> String {
    "npm".to_string()
}

fn default_publish_args() -> Vec<String> {
    vec!["publish".to_string()]
}

/// Configuration for the commit and tag stage.
///
/// `{version}` in the tag pattern and commit message is replaced by the new
/// version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default)]
    pub annotated_tags: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            tag_pattern: default_tag_pattern(),
            commit_message: default_commit_message(),
            annotated_tags: false,
        }
    }
}

impl GitConfig {
    /// The validated tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_pattern.clone())
    }

    /// Commit message for a version
    pub fn commit_message(&self, version: &Version) -> String {
        self.commit_message
            .replace("{version}", &version.to_string())
    }
}

/// Configuration for the registry publish step.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    #[serde(default = "default_publish_command")]
    pub command: String,

    #[serde(default = "default_publish_args")]
    pub args: Vec<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            command: default_publish_command(),
            args: default_publish_args(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            git: GitConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

impl Config {
    /// Manifest path, resolved against `working_dir` when relative
    pub fn manifest_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.manifest)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pkgbump.toml` in `working_dir`
/// 3. `.pkgbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or its tag
///   pattern is invalid
pub fn load_config(config_path: Option<&Path>, working_dir: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(working_dir.join(path)),
        None => {
            let local = working_dir.join(CONFIG_FILE_NAME);
            if local.exists() {
                Some(local)
            } else {
                dirs::config_dir()
                    .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
                    .filter(|path| path.exists())
            }
        }
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ReleaseError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseError::config(format!("Invalid {}: {}", path.display(), e)))?;

    config.git.tag_pattern()?;
    Ok(config)
}
