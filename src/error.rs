use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of failures, used by the orchestrator to decide
/// how an error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input shape, e.g. a malformed version string
    Validation,
    /// Not a repository, unsupported remote, or a failed readiness check
    RepositoryState,
    /// Unsupported, ambiguous or missing project version declaration
    ProjectDescriptor,
    /// Next-version decision failure; the decision table is total so nothing maps here today
    Policy,
    /// Test runner or version-control command failure
    ExternalTool,
}

/// Unified error type for git-pr operations
#[derive(Error, Debug)]
pub enum GitPrError {
    #[error("Invalid version: '{0}' is not a valid semantic version")]
    InvalidVersionInput(String),

    #[error("Directory is not a git repository: {0}")]
    NotAVersionControlRepository(PathBuf),

    #[error("Remote '{url}' is not a GitHub repository; only GitHub remotes are supported for pull requests")]
    UnsupportedRemoteProvider { url: String },

    #[error("You are currently on the default branch '{0}'. Switch to a feature branch to create a pull request.")]
    OnDefaultBranch(String),

    #[error("Your branch is behind the default branch by {0} commit(s). Merge the default branch into your branch first.")]
    BehindDefaultBranch(usize),

    #[error("Working tree is not clean or not in sync with its upstream. Commit and push or stash your changes first.")]
    DirtyWorkingTree,

    #[error("Unsupported project type: no package.json or .csproj found in {0}")]
    UnsupportedProjectKind(PathBuf),

    #[error("Multiple <Version> tags found in {0}")]
    MultipleVersionTags(PathBuf),

    #[error("Multiple .csproj files declare a <Version> tag: {}", format_paths(.0))]
    AmbiguousProjectVersion(Vec<PathBuf>),

    #[error("No <Version> tag found in any .csproj file under {0}")]
    NoVersionTagFound(PathBuf),

    #[error("Malformed manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("Tests failed: {0}")]
    TestsFailed(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git error: {0}")]
    Vcs(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-pr
pub type Result<T> = std::result::Result<T, GitPrError>;

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl GitPrError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitPrError::Config(msg.into())
    }

    /// Create a version-control error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        GitPrError::Vcs(msg.into())
    }

    /// Create a manifest error for the given file
    pub fn manifest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        GitPrError::Manifest {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Which part of the taxonomy this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            GitPrError::InvalidVersionInput(_) | GitPrError::Config(_) => ErrorCategory::Validation,
            GitPrError::NotAVersionControlRepository(_)
            | GitPrError::UnsupportedRemoteProvider { .. }
            | GitPrError::OnDefaultBranch(_)
            | GitPrError::BehindDefaultBranch(_)
            | GitPrError::DirtyWorkingTree => ErrorCategory::RepositoryState,
            GitPrError::UnsupportedProjectKind(_)
            | GitPrError::MultipleVersionTags(_)
            | GitPrError::AmbiguousProjectVersion(_)
            | GitPrError::NoVersionTagFound(_)
            | GitPrError::Manifest { .. }
            | GitPrError::Json(_) => ErrorCategory::ProjectDescriptor,
            GitPrError::TestsFailed(_)
            | GitPrError::Git(_)
            | GitPrError::Vcs(_)
            | GitPrError::Io(_) => ErrorCategory::ExternalTool,
        }
    }
}
