use tracing::debug;

use crate::domain::{CommitDivergence, HostedRemote, RepositoryState};
use crate::error::Result;
use crate::git::Repository;

/// Build a fresh [RepositoryState] for `remote`.
///
/// The remote must be a GitHub remote; this is checked before anything is
/// fetched. Divergence from the default branch is computed after fetching
/// all branches and tags so it is not stale.
pub fn inspect<R: Repository + ?Sized>(repo: &R, remote: &str) -> Result<RepositoryState> {
    let remote_url = repo.remote_url(remote)?;
    let hosted = HostedRemote::parse(&remote_url)?;

    repo.fetch(remote)?;

    let current_branch = repo.current_branch()?;
    let default_branch = repo.default_branch(remote)?;
    let is_clean = repo.is_clean()?;
    let (ahead, behind) = repo.ahead_behind(remote, &default_branch)?;

    debug!(
        current = %current_branch,
        default = %default_branch,
        is_clean,
        ahead,
        behind,
        "inspected repository"
    );

    Ok(RepositoryState {
        remote_url,
        normalized_hosted_url: hosted.web_url(),
        current_branch,
        default_branch,
        is_clean,
        commit_divergence: CommitDivergence { behind, ahead },
    })
}
