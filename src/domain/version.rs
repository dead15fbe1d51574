use crate::error::{GitPrError, Result};
use std::fmt;
use std::str::FromStr;

/// A validated `major.minor.patch[-prerelease]` version.
///
/// Only constructed through [`SemanticVersion::parse_strict`] or from plain
/// numeric components, so every value in circulation is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion(semver::Version);

impl SemanticVersion {
    /// Create a release version from its numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion(semver::Version::new(major, minor, patch))
    }

    /// The version used for a project that has never been released
    pub fn initial() -> Self {
        Self::new(1, 0, 0)
    }

    /// Parse a normalized version string.
    ///
    /// Rejects anything outside the semantic versioning grammar, including a
    /// leading `v` and numeric components with leading zeros. Tag prefixes must
    /// be stripped by the caller (see [`crate::domain::tag::ReleaseTag`]).
    /// Build metadata is accepted but discarded, so `1.0.0+build.7` equals
    /// `1.0.0`.
    pub fn parse_strict(text: &str) -> Result<Self> {
        let mut version = semver::Version::parse(text)
            .map_err(|_| GitPrError::InvalidVersionInput(text.to_string()))?;
        version.build = semver::BuildMetadata::EMPTY;
        Ok(SemanticVersion(version))
    }

    /// Parse a version as written by hand in a project manifest.
    ///
    /// Surrounding whitespace and one leading `v` are tolerated; the rest
    /// goes through [`SemanticVersion::parse_strict`].
    pub fn parse_declared(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        Self::parse_strict(trimmed.strip_prefix('v').unwrap_or(trimmed))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }

    /// Bump version according to bump type.
    ///
    /// Prerelease and build suffixes never survive an increment. A prerelease
    /// whose lower components are already zero for the requested bump is
    /// promoted to its release instead of skipping it: `1.2.3-beta` patch-bumps
    /// to `1.2.3`, and `2.0.0-rc.1` major-bumps to `2.0.0`.
    pub fn increment(&self, bump: VersionBump) -> Self {
        let v = &self.0;
        let pre = self.is_prerelease();
        match bump {
            VersionBump::Major if pre && v.minor == 0 && v.patch == 0 => {
                Self::new(v.major, 0, 0)
            }
            VersionBump::Major => Self::new(v.major + 1, 0, 0),
            VersionBump::Minor if pre && v.patch == 0 => Self::new(v.major, v.minor, 0),
            VersionBump::Minor => Self::new(v.major, v.minor + 1, 0),
            VersionBump::Patch if pre => Self::new(v.major, v.minor, v.patch),
            VersionBump::Patch => Self::new(v.major, v.minor, v.patch + 1),
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = GitPrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version bump type requested by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Patch => "patch",
            VersionBump::Minor => "minor",
            VersionBump::Major => "major",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> SemanticVersion {
        SemanticVersion::parse_strict(text).unwrap()
    }

    #[test]
    fn test_parse_strict_accepts_release_and_prerelease() {
        assert_eq!(v("1.2.3"), SemanticVersion::new(1, 2, 3));
        assert!(v("5.0.1-beta").is_prerelease());
        assert!(!v("5.0.1").is_prerelease());
    }

    #[test]
    fn test_parse_strict_rejects_malformed() {
        for text in ["v1.2.3", "1.2", "1.2.3.4", "01.2.3", "1.02.3", "", "not-a-tag", " 1.2.3"] {
            assert!(
                SemanticVersion::parse_strict(text).is_err(),
                "'{}' should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_error_is_invalid_version_input() {
        let err = SemanticVersion::parse_strict("1.x").unwrap_err();
        assert!(matches!(err, GitPrError::InvalidVersionInput(ref s) if s == "1.x"));
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["0.0.0", "1.2.3", "10.20.30", "1.0.0-alpha.1", "2.0.0-rc.1"] {
            assert_eq!(v(text).to_string(), text);
        }
    }

    #[test]
    fn test_build_metadata_is_discarded() {
        assert_eq!(v("2.0.0-rc.1+build.5").to_string(), "2.0.0-rc.1");
        assert_eq!(v("1.0.0+build.7"), SemanticVersion::initial());
    }

    #[test]
    fn test_parse_declared_tolerates_prefix_and_padding() {
        let expected = SemanticVersion::new(2, 3, 0);
        for text in ["2.3.0", "v2.3.0", " 2.3.0\n", "  v2.3.0 "] {
            assert_eq!(SemanticVersion::parse_declared(text).unwrap(), expected);
        }
        for text in ["vv2.3.0", "V2.3.0", "2.3", "latest"] {
            assert!(SemanticVersion::parse_declared(text).is_err(), "'{}'", text);
        }
    }

    #[test]
    fn test_prerelease_orders_below_release() {
        assert!(v("5.0.1-beta") < v("5.0.1"));
        assert!(v("5.0.1-beta") > v("5.0.0"));
        assert!(v("1.0.0-alpha") < v("1.0.0-beta"));
    }

    #[test]
    fn test_increment_release() {
        let base = SemanticVersion::new(1, 2, 3);
        assert_eq!(base.increment(VersionBump::Major), SemanticVersion::new(2, 0, 0));
        assert_eq!(base.increment(VersionBump::Minor), SemanticVersion::new(1, 3, 0));
        assert_eq!(base.increment(VersionBump::Patch), SemanticVersion::new(1, 2, 4));
    }

    #[test]
    fn test_increment_prerelease_drops_suffix() {
        assert_eq!(v("1.2.3-beta").increment(VersionBump::Patch), v("1.2.3"));
        assert_eq!(v("1.2.3-beta").increment(VersionBump::Minor), v("1.3.0"));
        assert_eq!(v("1.2.0-beta").increment(VersionBump::Minor), v("1.2.0"));
        assert_eq!(v("2.0.0-rc.1").increment(VersionBump::Major), v("2.0.0"));
        assert_eq!(v("2.1.0-rc.1").increment(VersionBump::Major), v("3.0.0"));
    }

    #[test]
    fn test_bump_display() {
        assert_eq!(VersionBump::Minor.to_string(), "minor");
    }
}
