//! Project descriptor resolution
//!
//! Detects which build ecosystem a project root uses, reads the version the
//! project declares, and rewrites it in every manifest that carries it.

pub mod dotnet;
pub mod node;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::SemanticVersion;
use crate::error::{GitPrError, Result};

/// Build ecosystem of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    NodePackage,
    DotnetProject,
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ecosystem::NodePackage => f.write_str("node"),
            Ecosystem::DotnetProject => f.write_str("dotnet"),
        }
    }
}

/// How a project declares its own version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    ecosystem: Ecosystem,
    root: PathBuf,
    declared_version: Option<SemanticVersion>,
    /// Version text found in the manifest when it did not parse
    raw_version: Option<String>,
    manifest_paths: Vec<PathBuf>,
}

impl ProjectDescriptor {
    pub(crate) fn new(
        ecosystem: Ecosystem,
        root: &Path,
        raw_version: Option<String>,
        manifest_paths: Vec<PathBuf>,
    ) -> Self {
        let declared_version = raw_version
            .as_deref()
            .and_then(|raw| SemanticVersion::parse_declared(raw).ok());
        let raw_version = raw_version.filter(|_| declared_version.is_none());
        ProjectDescriptor {
            ecosystem,
            root: root.to_path_buf(),
            declared_version,
            raw_version,
            manifest_paths,
        }
    }

    /// Detect the project kind in `root`.
    ///
    /// A Node `package.json` takes priority; otherwise `root` is scanned
    /// recursively for `.csproj` files.
    pub fn detect(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if let Some(descriptor) = node::detect(root)? {
            debug!(root = %root.display(), "detected node project");
            return Ok(descriptor);
        }
        if let Some(descriptor) = dotnet::detect(root)? {
            debug!(root = %root.display(), "detected dotnet project");
            return Ok(descriptor);
        }
        Err(GitPrError::UnsupportedProjectKind(root.to_path_buf()))
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn declared_version(&self) -> Option<&SemanticVersion> {
        self.declared_version.as_ref()
    }

    /// Version text present in the manifest but not a valid semantic version
    pub fn unparsable_version(&self) -> Option<&str> {
        self.raw_version.as_deref()
    }

    /// Files kept in sync when the version changes, primary manifest first
    pub fn manifest_paths(&self) -> &[PathBuf] {
        &self.manifest_paths
    }

    /// Manifest paths relative to the project root, for display
    pub fn display_paths(&self) -> String {
        self.manifest_paths
            .iter()
            .map(|p| p.strip_prefix(&self.root).unwrap_or(p).display().to_string())
            .collect::<Vec<_>>()
            .join(" and ")
    }

    /// Rewrite the declared version in every manifest.
    ///
    /// `new_version` must be a strict semantic version. Everything else in the
    /// manifests is preserved. No backup is taken.
    pub fn write_version(&mut self, new_version: &str) -> Result<()> {
        let version = SemanticVersion::parse_strict(new_version)?;
        for path in &self.manifest_paths {
            debug!(path = %path.display(), version = %version, "writing version");
            match self.ecosystem {
                Ecosystem::NodePackage => node::write_version(path, &version)?,
                Ecosystem::DotnetProject => dotnet::write_version(path, &version)?,
            }
        }
        self.declared_version = Some(version);
        self.raw_version = None;
        Ok(())
    }
}
