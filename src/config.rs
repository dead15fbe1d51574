use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GitPrError, Result};

pub const LOCAL_CONFIG: &str = "gitpr.toml";
pub const USER_CONFIG: &str = ".gitpr.toml";

/// Represents the complete configuration for git-pr.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub commit: CommitConfig,

    #[serde(default)]
    pub pull_request: PullRequestConfig,

    #[serde(default)]
    pub tests: TestsConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_commit_message() -> String {
    "chore: bump version to {version}".to_string()
}

fn default_title() -> String {
    "PLACEHOLDER CREATE YOUR OWN TITLE".to_string()
}

fn default_body() -> String {
    "PLACEHOLDER BODY\n\n Closes (change to #{issue_number} for automatic closing of issues) (add description of closing notes here)".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_node_command() -> Vec<String> {
    vec!["npm".to_string(), "test".to_string()]
}

fn default_dotnet_command() -> Vec<String> {
    vec!["dotnet".to_string(), "test".to_string()]
}

/// Version bump commit settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitConfig {
    /// Commit message; `{version}` is replaced by the new version
    #[serde(default = "default_commit_message")]
    pub message: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        CommitConfig {
            message: default_commit_message(),
        }
    }
}

impl CommitConfig {
    pub fn message_for(&self, version: &str) -> String {
        self.message.replace("{version}", version)
    }
}

/// Pre-filled title and body of the pull request link
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PullRequestConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_body")]
    pub body: String,
}

impl Default for PullRequestConfig {
    fn default() -> Self {
        PullRequestConfig {
            title: default_title(),
            body: default_body(),
        }
    }
}

/// Test commands run before the version is bumped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TestsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_node_command")]
    pub node_command: Vec<String>,

    #[serde(default = "default_dotnet_command")]
    pub dotnet_command: Vec<String>,
}

impl Default for TestsConfig {
    fn default() -> Self {
        TestsConfig {
            enabled: default_enabled(),
            node_command: default_node_command(),
            dotnet_command: default_dotnet_command(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            commit: CommitConfig::default(),
            pull_request: PullRequestConfig::default(),
            tests: TestsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitpr.toml` in current directory
/// 3. `.gitpr.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };
    match path {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG))
        .filter(|path| path.exists())
}

fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        GitPrError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| GitPrError::config(format!("cannot parse {}: {}", path.display(), e)))?;
    if config.tests.node_command.is_empty() || config.tests.dotnet_command.is_empty() {
        return Err(GitPrError::config(format!(
            "{}: test commands must not be empty",
            path.display()
        )));
    }
    Ok(config)
}
