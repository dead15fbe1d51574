//! Domain logic - pure business rules independent of git and the filesystem

pub mod decision;
pub mod remote;
pub mod state;
pub mod tag;
pub mod version;

pub use decision::{decide, NextVersionDecision, VersionSource};
pub use remote::HostedRemote;
pub use state::{check_readiness, CommitDivergence, RepositoryState};
pub use tag::{select_latest, ReleaseTag};
pub use version::{SemanticVersion, VersionBump};
