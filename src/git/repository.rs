use std::path::Path;

use git2::{
    BranchType, Cred, CredentialType, ErrorCode, FetchOptions, IndexAddOption, PushOptions,
    RemoteCallbacks, Repository as Git2Repo, StatusOptions,
};
use tracing::debug;

use crate::error::{GitPrError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository containing `path`
    ///
    /// Fails with `NotAVersionControlRepository` when neither `path` nor any
    /// parent is inside a git repository.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitPrError::NotAVersionControlRepository(path.to_path_buf())
            } else {
                GitPrError::Git(e)
            }
        })?;
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

/// Credential callbacks shared by fetch and push.
///
/// Tries SSH keys from `~/.ssh`, then the SSH agent, then the configured
/// git credential helper for HTTPS remotes.
fn remote_callbacks(config: &git2::Config) -> RemoteCallbacks<'_> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }
            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            if let Ok(cred) = Cred::credential_helper(config, url, username_from_url) {
                return Ok(cred);
            }
        }

        Cred::default()
    });
    callbacks
}

impl super::Repository for Git2Repository {
    fn remote_url(&self, remote: &str) -> Result<String> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|_| GitPrError::vcs(format!("Remote '{}' not found", remote)))?;
        found
            .url()
            .map(str::to_string)
            .ok_or_else(|| GitPrError::vcs(format!("Remote '{}' has no valid URL", remote)))
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        let mut found = self
            .repo
            .find_remote(remote)
            .map_err(|_| GitPrError::vcs(format!("Remote '{}' not found", remote)))?;

        let config = self.repo.config()?;
        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks(&config));

        let refspec_heads = format!("+refs/heads/*:refs/remotes/{}/*", remote);
        let refspecs = [refspec_heads.as_str(), "+refs/tags/*:refs/tags/*"];
        debug!(remote, "fetching branches and tags");
        found
            .fetch(&refspecs, Some(&mut fetch_options), None)
            .map_err(|e| GitPrError::vcs(format!("Failed to fetch from '{}': {}", remote, e)))?;
        Ok(())
    }

    fn default_branch(&self, remote: &str) -> Result<String> {
        let head_ref = format!("refs/remotes/{}/HEAD", remote);
        let missing = || {
            GitPrError::vcs(format!(
                "Cannot resolve {}/HEAD; run `git remote set-head {} --auto`",
                remote, remote
            ))
        };

        let reference = self.repo.find_reference(&head_ref).map_err(|_| missing())?;
        let target = reference.symbolic_target().ok_or_else(missing)?;
        let prefix = format!("refs/remotes/{}/", remote);
        target
            .strip_prefix(&prefix)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(missing)
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(GitPrError::vcs("HEAD is detached; check out a branch first"));
        }
        head.shorthand()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| GitPrError::vcs("Current branch name is not valid UTF-8"))
    }

    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);
        let statuses = self.repo.statuses(Some(&mut options))?;
        if !statuses.is_empty() {
            debug!(changes = statuses.len(), "working tree has changes");
            return Ok(false);
        }

        let branch_name = self.current_branch()?;
        let branch = self.repo.find_branch(&branch_name, BranchType::Local)?;
        let upstream = match branch.upstream() {
            Ok(upstream) => upstream,
            Err(_) => {
                debug!(branch = %branch_name, "no upstream configured");
                return Ok(false);
            }
        };

        let local = branch.get().peel_to_commit()?.id();
        let remote = upstream.get().peel_to_commit()?.id();
        let (ahead, behind) = self.repo.graph_ahead_behind(local, remote)?;
        debug!(ahead, behind, "compared with upstream");
        Ok(ahead == 0 && behind == 0)
    }

    fn ahead_behind(&self, remote: &str, branch: &str) -> Result<(usize, usize)> {
        let head = self.repo.head()?.peel_to_commit()?.id();
        let tracking = format!("refs/remotes/{}/{}", remote, branch);
        let target = self
            .repo
            .find_reference(&tracking)
            .map_err(|_| GitPrError::vcs(format!("Cannot find {}/{}", remote, branch)))?
            .peel_to_commit()?
            .id();
        Ok(self.repo.graph_ahead_behind(head, target)?)
    }

    fn tag_names(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;
        Ok(tags.iter().flatten().map(str::to_string).collect())
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"].iter(), None)?;
        index.write()?;

        let tree = self.repo.find_tree(index.write_tree()?)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;
        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;
        debug!(commit = %oid, "created commit");
        Ok(())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        let mut found = self
            .repo
            .find_remote(remote)
            .map_err(|_| GitPrError::vcs(format!("No remote named '{}' found", remote)))?;

        let config = self.repo.config()?;
        let mut callbacks = remote_callbacks(&config);
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "Push rejected for {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/heads/{}:refs/heads/{}", branch, branch);
        debug!(remote, branch, "pushing");
        found
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    GitPrError::vcs(format!("Network error during push: {}", e))
                }
                _ => GitPrError::vcs(format!("Failed to push '{}': {}", branch, e)),
            })
    }
}
