use std::fs;
use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::{Ecosystem, ProjectDescriptor};
use crate::domain::SemanticVersion;
use crate::error::{GitPrError, Result};

const PROJECT_EXTENSION: &str = "csproj";
const VERSION_TAG: &str = r"<Version>(.*?)</Version>";
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "bin", "obj"];

fn version_tag(context: &Path) -> Result<Regex> {
    Regex::new(VERSION_TAG).map_err(|e| GitPrError::manifest(context, e.to_string()))
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Recursively find `.csproj` files below `root`, sorted by path
pub fn find_project_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e));
    for entry in walker {
        let entry = entry.map_err(|e| GitPrError::Io(e.into()))?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|ext| ext.to_str()) == Some(PROJECT_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Find the single `.csproj` under `root` that declares a `<Version>`.
///
/// Returns `Ok(None)` when there are no project files at all. Each file may
/// carry at most one version tag, and at most one file may carry one.
pub fn detect(root: &Path) -> Result<Option<ProjectDescriptor>> {
    let files = find_project_files(root)?;
    if files.is_empty() {
        return Ok(None);
    }

    let pattern = version_tag(root)?;
    let mut versioned = Vec::new();
    for file in files {
        let content = fs::read_to_string(&file)?;
        let mut captures = pattern.captures_iter(&content);
        let Some(first) = captures.next() else {
            debug!(path = %file.display(), "no version tag");
            continue;
        };
        if captures.next().is_some() {
            return Err(GitPrError::MultipleVersionTags(file));
        }
        let raw = first[1].to_string();
        versioned.push((file, raw));
    }

    match versioned.len() {
        0 => Err(GitPrError::NoVersionTagFound(root.to_path_buf())),
        1 => {
            let (path, raw) = versioned.remove(0);
            Ok(Some(ProjectDescriptor::new(
                Ecosystem::DotnetProject,
                root,
                Some(raw),
                vec![path],
            )))
        }
        _ => Err(GitPrError::AmbiguousProjectVersion(
            versioned.into_iter().map(|(path, _)| path).collect(),
        )),
    }
}

/// Replace the inner text of the `<Version>` tag, leaving every other byte as is
pub fn write_version(path: &Path, version: &SemanticVersion) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let pattern = version_tag(path)?;
    if !pattern.is_match(&content) {
        return Err(GitPrError::manifest(path, "no <Version> tag to update"));
    }
    let replacement = format!("<Version>{}</Version>", version);
    let updated = pattern.replacen(&content, 1, NoExpand(&replacement));
    fs::write(path, updated.as_bytes())?;
    Ok(())
}
