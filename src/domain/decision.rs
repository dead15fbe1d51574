//! Next-version policy.
//!
//! Pure decision logic: given the latest release tag and the version the
//! project declares, decide what the next version is and where it came from.

use std::fmt;

use crate::domain::version::{SemanticVersion, VersionBump};

/// Which input the next version was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    FromTag,
    FromProject,
    FallbackDefault,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionSource::FromTag => "latest release tag",
            VersionSource::FromProject => "project version",
            VersionSource::FallbackDefault => "default initial version",
        };
        f.write_str(name)
    }
}

/// Outcome of the next-version policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersionDecision {
    pub version: SemanticVersion,
    /// Always paired with version 1.0.0
    pub is_initial_release: bool,
    pub source: VersionSource,
}

impl NextVersionDecision {
    fn initial(source: VersionSource) -> Self {
        NextVersionDecision {
            version: SemanticVersion::initial(),
            is_initial_release: true,
            source,
        }
    }
}

/// Decide the next version.
///
/// Rules, first match wins:
/// 1. no tag and no declared version: initial release `1.0.0`
/// 2. a tag exists: bump the tag, even if the declared version disagrees
/// 3. otherwise bump the declared version, except that a declared `1.0.0`
///    is taken as never released and returned unchanged
pub fn decide(
    latest_tag: Option<&SemanticVersion>,
    declared_version: Option<&SemanticVersion>,
    bump: VersionBump,
) -> NextVersionDecision {
    match (latest_tag, declared_version) {
        (None, None) => NextVersionDecision::initial(VersionSource::FallbackDefault),
        (Some(tag), _) => NextVersionDecision {
            version: tag.increment(bump),
            is_initial_release: false,
            source: VersionSource::FromTag,
        },
        (None, Some(declared)) if *declared == SemanticVersion::initial() => {
            NextVersionDecision::initial(VersionSource::FromProject)
        }
        (None, Some(declared)) => NextVersionDecision {
            version: declared.increment(bump),
            is_initial_release: false,
            source: VersionSource::FromProject,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> SemanticVersion {
        SemanticVersion::parse_strict(text).unwrap()
    }

    #[test]
    fn test_tag_wins_when_project_is_ahead() {
        let d = decide(Some(&v("1.2.3")), Some(&v("1.2.4")), VersionBump::Minor);
        assert_eq!(d.version, v("1.3.0"));
        assert_eq!(d.source, VersionSource::FromTag);
        assert!(!d.is_initial_release);
    }

    #[test]
    fn test_tag_wins_when_project_is_behind() {
        let d = decide(Some(&v("2.0.0")), Some(&v("1.5.0")), VersionBump::Patch);
        assert_eq!(d.version, v("2.0.1"));
        assert_eq!(d.source, VersionSource::FromTag);
        assert!(!d.is_initial_release);
    }

    #[test]
    fn test_fallback_when_nothing_known() {
        for bump in [VersionBump::Patch, VersionBump::Minor, VersionBump::Major] {
            let d = decide(None, None, bump);
            assert_eq!(d.version, v("1.0.0"));
            assert_eq!(d.source, VersionSource::FallbackDefault);
            assert!(d.is_initial_release);
        }
    }

    #[test]
    fn test_tag_wins_when_equal_to_project() {
        let d = decide(Some(&v("1.0.0")), Some(&v("1.0.0")), VersionBump::Minor);
        assert_eq!(d.version, v("1.1.0"));
        assert_eq!(d.source, VersionSource::FromTag);
        assert!(!d.is_initial_release);
    }

    #[test]
    fn test_declared_one_zero_zero_is_never_released() {
        let d = decide(None, Some(&v("1.0.0")), VersionBump::Minor);
        assert_eq!(d.version, v("1.0.0"));
        assert_eq!(d.source, VersionSource::FromProject);
        assert!(d.is_initial_release);
    }

    #[test]
    fn test_declared_one_zero_zero_with_build_metadata_is_never_released() {
        let d = decide(None, Some(&v("1.0.0+build.7")), VersionBump::Minor);
        assert_eq!(d.version.to_string(), "1.0.0");
        assert_eq!(d.source, VersionSource::FromProject);
        assert!(d.is_initial_release);
    }

    #[test]
    fn test_declared_version_bumped_without_tag() {
        let d = decide(None, Some(&v("0.4.2")), VersionBump::Major);
        assert_eq!(d.version, v("1.0.0"));
        assert_eq!(d.source, VersionSource::FromProject);
        // Reached 1.0.0 by bumping, so this is not flagged as an initial release
        assert!(!d.is_initial_release);
    }

    #[test]
    fn test_tag_without_declared_version() {
        let d = decide(Some(&v("3.1.4")), None, VersionBump::Patch);
        assert_eq!(d.version, v("3.1.5"));
        assert_eq!(d.source, VersionSource::FromTag);
    }
}
