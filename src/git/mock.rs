use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{GitPrError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
///
/// Records commits, pushes and fetches so tests can assert on the side
/// effects a workflow performed.
pub struct MockRepository {
    remotes: HashMap<String, String>,
    default_branch: String,
    current_branch: String,
    clean: bool,
    ahead: usize,
    behind: usize,
    tags: Vec<String>,
    fail_tag_listing: bool,
    fetches: RefCell<Vec<String>>,
    commits: RefCell<Vec<String>>,
    pushes: RefCell<Vec<(String, String)>>,
}

impl MockRepository {
    /// A clean feature branch one commit ahead of `main`, with `origin` on GitHub
    pub fn new() -> Self {
        let mut remotes = HashMap::new();
        remotes.insert(
            "origin".to_string(),
            "git@github.com:acme/widgets.git".to_string(),
        );
        MockRepository {
            remotes,
            default_branch: "main".to_string(),
            current_branch: "feature/change".to_string(),
            clean: true,
            ahead: 1,
            behind: 0,
            tags: Vec::new(),
            fail_tag_listing: false,
            fetches: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            pushes: RefCell::new(Vec::new()),
        }
    }

    pub fn set_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.insert(name.into(), url.into());
    }

    pub fn set_branches(&mut self, current: impl Into<String>, default: impl Into<String>) {
        self.current_branch = current.into();
        self.default_branch = default.into();
    }

    pub fn set_clean(&mut self, clean: bool) {
        self.clean = clean;
    }

    pub fn set_divergence(&mut self, ahead: usize, behind: usize) {
        self.ahead = ahead;
        self.behind = behind;
    }

    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Make `tag_names` fail
    pub fn fail_tag_listing(&mut self) {
        self.fail_tag_listing = true;
    }

    /// Remotes fetched so far
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }

    /// Commit messages recorded so far
    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }

    /// `(remote, branch)` pairs pushed so far
    pub fn pushes(&self) -> Vec<(String, String)> {
        self.pushes.borrow().clone()
    }

    fn require_remote(&self, remote: &str) -> Result<&String> {
        self.remotes
            .get(remote)
            .ok_or_else(|| GitPrError::vcs(format!("Remote '{}' not found", remote)))
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn remote_url(&self, remote: &str) -> Result<String> {
        self.require_remote(remote).cloned()
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        self.require_remote(remote)?;
        self.fetches.borrow_mut().push(remote.to_string());
        Ok(())
    }

    fn default_branch(&self, remote: &str) -> Result<String> {
        self.require_remote(remote)?;
        Ok(self.default_branch.clone())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.current_branch.clone())
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(self.clean)
    }

    fn ahead_behind(&self, remote: &str, _branch: &str) -> Result<(usize, usize)> {
        self.require_remote(remote)?;
        Ok((self.ahead, self.behind))
    }

    fn tag_names(&self) -> Result<Vec<String>> {
        if self.fail_tag_listing {
            return Err(GitPrError::vcs("tag listing failed"));
        }
        Ok(self.tags.clone())
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.require_remote(remote)?;
        self.pushes
            .borrow_mut()
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_defaults() {
        let repo = MockRepository::new();
        assert_eq!(repo.current_branch().unwrap(), "feature/change");
        assert_eq!(repo.default_branch("origin").unwrap(), "main");
        assert!(repo.is_clean().unwrap());
        assert!(repo.tag_names().unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_unknown_remote() {
        let repo = MockRepository::new();
        assert!(repo.remote_url("upstream").is_err());
        assert!(repo.fetch("upstream").is_err());
    }

    #[test]
    fn test_mock_repository_records_side_effects() {
        let repo = MockRepository::default();
        repo.fetch("origin").unwrap();
        repo.commit_all("chore: bump version to 1.1.0").unwrap();
        repo.push_branch("origin", "feature/change").unwrap();

        assert_eq!(repo.fetches(), vec!["origin".to_string()]);
        assert_eq!(repo.commits(), vec!["chore: bump version to 1.1.0".to_string()]);
        assert_eq!(
            repo.pushes(),
            vec![("origin".to_string(), "feature/change".to_string())]
        );
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.add_tag("v2.0.0");
        assert_eq!(repo.tag_names().unwrap().len(), 2);

        repo.fail_tag_listing();
        assert!(repo.tag_names().is_err());
    }
}
