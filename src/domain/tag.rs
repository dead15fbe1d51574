use crate::domain::version::SemanticVersion;

/// A git tag whose name denotes a semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    /// The tag name as it appears in the repository (e.g. "v1.2.3")
    pub name: String,
    /// The version the tag names
    pub version: SemanticVersion,
}

impl ReleaseTag {
    /// Interpret a tag name as a release tag.
    ///
    /// A single leading `v` is accepted; the remainder must be a strict
    /// semantic version.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.strip_prefix('v').unwrap_or(name);
        SemanticVersion::parse_strict(normalized)
            .ok()
            .map(|version| ReleaseTag {
                name: name.to_string(),
                version,
            })
    }
}

/// Pick the highest release tag from an arbitrary list of tag names.
///
/// Names that are not versions are ignored. Prereleases take part in the
/// comparison and rank below their own release. Returns `None` when no name
/// parses.
pub fn select_latest<I, S>(candidates: I) -> Option<ReleaseTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter_map(|name| ReleaseTag::parse(name.as_ref()))
        .max_by(|a, b| a.version.cmp(&b.version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_prefix() {
        let tag = ReleaseTag::parse("v1.2.3").unwrap();
        assert_eq!(tag.name, "v1.2.3");
        assert_eq!(tag.version, SemanticVersion::new(1, 2, 3));

        let bare = ReleaseTag::parse("1.2.3").unwrap();
        assert_eq!(bare.version, SemanticVersion::new(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_non_versions() {
        assert!(ReleaseTag::parse("release-1.2.3").is_none());
        assert!(ReleaseTag::parse("vv1.2.3").is_none());
        assert!(ReleaseTag::parse("V1.2.3").is_none());
        assert!(ReleaseTag::parse("").is_none());
    }

    #[test]
    fn test_select_latest_mixed_candidates() {
        let tags = ["v3.0.0", "v1.1.0", "v2.0.0", "v5.0.1-beta", "v6.0.0", "not-a-tag"];
        let latest = select_latest(tags).unwrap();
        assert_eq!(latest.name, "v6.0.0");
    }

    #[test]
    fn test_select_latest_prerelease_can_win() {
        let latest = select_latest(["v5.0.0", "v5.0.1-beta"]).unwrap();
        assert_eq!(latest.name, "v5.0.1-beta");

        let latest = select_latest(["v5.0.1-beta", "v5.0.1"]).unwrap();
        assert_eq!(latest.name, "v5.0.1");
    }

    #[test]
    fn test_select_latest_none_when_nothing_parses() {
        assert!(select_latest(["foo", "bar", "v1.2"]).is_none());
        assert!(select_latest(Vec::<String>::new()).is_none());
    }
}
