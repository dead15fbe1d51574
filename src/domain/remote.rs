use crate::error::{GitPrError, Result};

const SSH_PREFIX: &str = "git@github.com:";
const HTTPS_PREFIX: &str = "https://github.com/";
const WEB_ROOT: &str = "https://github.com";

/// A remote URL pointing at a GitHub-hosted repository.
///
/// Only the SSH form (`git@github.com:<owner>/<repo>.git`) and the HTTPS form
/// (`https://github.com/<owner>/<repo>.git`) are accepted, because the
/// pull-request link format is GitHub specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedRemote {
    url: String,
    owner: String,
    repo: String,
}

impl HostedRemote {
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        let unsupported = || GitPrError::UnsupportedRemoteProvider {
            url: url.to_string(),
        };

        let path = url
            .strip_prefix(SSH_PREFIX)
            .or_else(|| url.strip_prefix(HTTPS_PREFIX))
            .ok_or_else(unsupported)?;
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        let (owner, repo) = path.split_once('/').ok_or_else(unsupported)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(unsupported());
        }

        Ok(HostedRemote {
            url: url.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// The remote URL as configured
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Browsable web URL of the repository, without a `.git` suffix
    pub fn web_url(&self) -> String {
        format!("{}/{}/{}", WEB_ROOT, self.owner, self.repo)
    }
}
