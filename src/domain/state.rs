use crate::error::{GitPrError, Result};

/// Commit counts of the current branch relative to the default branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitDivergence {
    /// Commits only on the default branch
    pub behind: usize,
    /// Commits only on the current branch
    pub ahead: usize,
}

/// Snapshot of the repository, taken once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryState {
    pub remote_url: String,
    pub normalized_hosted_url: String,
    pub current_branch: String,
    pub default_branch: String,
    /// No uncommitted changes and level with the upstream branch
    pub is_clean: bool,
    pub commit_divergence: CommitDivergence,
}

impl RepositoryState {
    /// See [`check_readiness`]
    pub fn ensure_ready(&self) -> Result<()> {
        check_readiness(self)
    }
}

/// Decide whether a pull request may be opened from this state.
///
/// Checks run in a fixed order and stop at the first failure: being on the
/// default branch, being behind it, then a dirty working tree.
pub fn check_readiness(state: &RepositoryState) -> Result<()> {
    if state.current_branch == state.default_branch {
        return Err(GitPrError::OnDefaultBranch(state.default_branch.clone()));
    }
    if state.commit_divergence.behind > 0 {
        return Err(GitPrError::BehindDefaultBranch(
            state.commit_divergence.behind,
        ));
    }
    if !state.is_clean {
        return Err(GitPrError::DirtyWorkingTree);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> RepositoryState {
        RepositoryState {
            remote_url: "git@github.com:acme/widgets.git".to_string(),
            normalized_hosted_url: "https://github.com/acme/widgets".to_string(),
            current_branch: "feature/login".to_string(),
            default_branch: "main".to_string(),
            is_clean: true,
            commit_divergence: CommitDivergence { behind: 0, ahead: 2 },
        }
    }

    #[test]
    fn test_ready_state_passes() {
        assert!(check_readiness(&ready_state()).is_ok());
        assert!(ready_state().ensure_ready().is_ok());
    }

    #[test]
    fn test_default_branch_checked_first() {
        let combos = [(true, 0), (false, 0), (true, 4), (false, 4)];
        for (is_clean, behind) in combos {
            let mut state = ready_state();
            state.current_branch = "main".to_string();
            state.is_clean = is_clean;
            state.commit_divergence.behind = behind;

            let err = check_readiness(&state).unwrap_err();
            assert!(
                matches!(err, GitPrError::OnDefaultBranch(ref b) if b == "main"),
                "expected OnDefaultBranch for clean={} behind={}, got {}",
                is_clean,
                behind,
                err
            );
        }
    }

    #[test]
    fn test_behind_reported_with_count() {
        let mut state = ready_state();
        state.commit_divergence.behind = 3;
        state.is_clean = false;
        let err = check_readiness(&state).unwrap_err();
        assert!(matches!(err, GitPrError::BehindDefaultBranch(3)));
    }

    #[test]
    fn test_dirty_tree_fails() {
        let mut state = ready_state();
        state.is_clean = false;
        let err = check_readiness(&state).unwrap_err();
        assert!(matches!(err, GitPrError::DirtyWorkingTree));
    }

    #[test]
    fn test_ahead_alone_is_fine() {
        let mut state = ready_state();
        state.commit_divergence.ahead = 50;
        assert!(check_readiness(&state).is_ok());
    }
}
