// tests/project_test.rs
use std::fs;

use git_pr::domain::SemanticVersion;
use git_pr::project::{Ecosystem, ProjectDescriptor};
use tempfile::TempDir;

#[test]
fn test_node_write_version_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("package.json");
    let lock = dir.path().join("package-lock.json");
    fs::write(&manifest, "{\n    \"name\": \"demo\",\n    \"version\": \"0.9.0\"\n}").unwrap();
    fs::write(
        &lock,
        r#"{"name":"demo","version":"0.9.0","lockfileVersion":3,"packages":{"":{"name":"demo","version":"0.9.0"}}}"#,
    )
    .unwrap();

    let mut descriptor = ProjectDescriptor::detect(dir.path()).unwrap();
    assert_eq!(descriptor.ecosystem(), Ecosystem::NodePackage);
    assert_eq!(descriptor.display_paths(), "package.json and package-lock.json");

    descriptor.write_version("1.0.0").unwrap();
    let first_manifest = fs::read(&manifest).unwrap();
    let first_lock = fs::read(&lock).unwrap();

    descriptor.write_version("1.0.0").unwrap();
    assert_eq!(fs::read(&manifest).unwrap(), first_manifest);
    assert_eq!(fs::read(&lock).unwrap(), first_lock);

    assert_eq!(
        String::from_utf8(first_manifest).unwrap(),
        "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\"\n}\n"
    );
    assert_eq!(
        descriptor.declared_version(),
        Some(&SemanticVersion::new(1, 0, 0))
    );

    let redetected = ProjectDescriptor::detect(dir.path()).unwrap();
    assert_eq!(redetected.declared_version(), Some(&SemanticVersion::new(1, 0, 0)));
}

#[test]
fn test_dotnet_write_version_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let project_dir = dir.path().join("src").join("Api");
    fs::create_dir_all(&project_dir).unwrap();
    let project = project_dir.join("Api.csproj");
    let original = "<Project>\n  <PropertyGroup>\n    <Version>0.1.0-preview</Version>\n    <Authors>acme</Authors>\n  </PropertyGroup>\n</Project>";
    fs::write(&project, original).unwrap();

    let mut descriptor = ProjectDescriptor::detect(dir.path()).unwrap();
    assert_eq!(descriptor.ecosystem(), Ecosystem::DotnetProject);
    assert!(descriptor.declared_version().unwrap().is_prerelease());

    descriptor.write_version("0.1.0").unwrap();
    let first = fs::read(&project).unwrap();
    descriptor.write_version("0.1.0").unwrap();
    assert_eq!(fs::read(&project).unwrap(), first);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        original.replace("0.1.0-preview", "0.1.0")
    );
}

#[test]
fn test_write_version_rejects_malformed_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"version":"1.0.0"}"#).unwrap();
    let mut descriptor = ProjectDescriptor::detect(dir.path()).unwrap();

    for bad in ["", "1.0", "v1.0.0", "latest"] {
        assert!(descriptor.write_version(bad).is_err(), "'{}' accepted", bad);
    }
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        r#"{"version":"1.0.0"}"#
    );
}
