use std::fs;
use std::path::Path;

use serde_json::Value;

use super::{Ecosystem, ProjectDescriptor};
use crate::domain::SemanticVersion;
use crate::error::{GitPrError, Result};

pub const MANIFEST: &str = "package.json";
pub const LOCK_FILE: &str = "package-lock.json";

/// Read `package.json` from `root`, if there is one.
///
/// A missing `version` field is not an error; the descriptor simply has no
/// declared version. `package-lock.json` is listed for rewriting when
/// present but never read for a version.
pub fn detect(root: &Path) -> Result<Option<ProjectDescriptor>> {
    let manifest = root.join(MANIFEST);
    if !manifest.is_file() {
        return Ok(None);
    }

    let document = read_object(&manifest)?;
    let raw_version = match document.get("version") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    let mut paths = vec![manifest];
    let lock = root.join(LOCK_FILE);
    if lock.is_file() {
        paths.push(lock);
    }

    Ok(Some(ProjectDescriptor::new(
        Ecosystem::NodePackage,
        root,
        raw_version,
        paths,
    )))
}

/// Set the top-level `version` of a JSON manifest.
///
/// Lock files also carry the root package version under `packages[""]`,
/// which is updated when present. Output is two-space indented JSON with a
/// trailing newline; key order is preserved.
pub fn write_version(path: &Path, version: &SemanticVersion) -> Result<()> {
    let mut document = read_object(path)?;
    let version = Value::String(version.to_string());

    if let Some(root_package) = document
        .get_mut("packages")
        .and_then(|packages| packages.get_mut(""))
        .and_then(Value::as_object_mut)
    {
        root_package.insert("version".to_string(), version.clone());
    }

    if let Value::Object(map) = &mut document {
        map.insert("version".to_string(), version);
    }

    let mut output = serde_json::to_string_pretty(&document)?;
    output.push('\n');
    fs::write(path, output)?;
    Ok(())
}

fn read_object(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)
        .map_err(|e| GitPrError::manifest(path, format!("invalid JSON: {}", e)))?;
    if !document.is_object() {
        return Err(GitPrError::manifest(path, "expected a JSON object"));
    }
    Ok(document)
}
