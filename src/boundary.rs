use std::fmt;

/// Non-fatal conditions met while preparing a pull request.
/// The workflow continues with a documented fallback and reports these to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag in the repository names a semantic version
    NoReleaseTag,
    /// Tags could not be listed; treated as if none exist
    TagListingFailed { reason: String },
    /// The manifest declares a version that is not a semantic version
    UnparsableDeclaredVersion { version: String, manifest: String },
    /// The manifest declares a higher version than the latest tag, which still wins
    DeclaredVersionAhead { declared: String, tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleaseTag => write!(
                f,
                "No release tags found, will use project version or start from 1.0.0"
            ),
            BoundaryWarning::TagListingFailed { reason } => {
                write!(f, "Failed to list release tags ({}), continuing without one", reason)
            }
            BoundaryWarning::UnparsableDeclaredVersion { version, manifest } => write!(
                f,
                "Version '{}' in {} is not a semantic version and will be ignored",
                version, manifest
            ),
            BoundaryWarning::DeclaredVersionAhead { declared, tag } => write!(
                f,
                "Project version {} is ahead of latest release tag {}; the tag takes precedence",
                declared, tag
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let warning = BoundaryWarning::DeclaredVersionAhead {
            declared: "1.2.4".to_string(),
            tag: "v1.2.3".to_string(),
        };
        assert!(warning.to_string().contains("1.2.4"));
        assert!(warning.to_string().contains("v1.2.3"));

        let warning = BoundaryWarning::UnparsableDeclaredVersion {
            version: "latest".to_string(),
            manifest: "package.json".to_string(),
        };
        assert!(warning.to_string().contains("'latest' in package.json"));
    }
}
