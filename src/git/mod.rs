//! Git operations abstraction layer
//!
//! The [Repository] trait is the complete set of version-control operations
//! git-pr performs; nothing outside it is ever issued against a repository.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for testing
//!
//! [inspector] builds a [crate::domain::RepositoryState] snapshot on top of
//! the trait.

pub mod inspector;
pub mod mock;
pub mod repository;

pub use inspector::inspect;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Allow-listed git operations
///
/// All methods return [crate::error::Result<T>]; implementations map
/// backend errors to [crate::error::GitPrError] variants.
pub trait Repository {
    /// URL configured for the named remote
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Fetch all branches and tags from the named remote
    fn fetch(&self, remote: &str) -> Result<()>;

    /// Branch the remote's `HEAD` points at, without the remote prefix
    fn default_branch(&self, remote: &str) -> Result<String>;

    /// Name of the branch checked out in the working tree
    fn current_branch(&self) -> Result<String>;

    /// True when nothing is uncommitted (untracked files count) and the
    /// current branch is level with its upstream
    fn is_clean(&self) -> Result<bool>;

    /// `(ahead, behind)` commit counts of `HEAD` relative to `<remote>/<branch>`
    fn ahead_behind(&self, remote: &str, branch: &str) -> Result<(usize, usize)>;

    /// Names of all tags in the repository
    fn tag_names(&self) -> Result<Vec<String>>;

    /// Stage every change in the working tree and commit it on `HEAD`
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Push a local branch to the same name on the remote
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;
}
