//! Pull request workflow orchestration
//!
//! Sequences the readiness check, test run, version decision, manifest
//! update and push. Every step returns a `Result`; this module alone decides
//! which failures abort the run and which degrade to a warning.

use std::path::Path;

use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{decide, select_latest, ReleaseTag, VersionBump, VersionSource};
use crate::error::Result;
use crate::git::{inspect, Repository};
use crate::project::ProjectDescriptor;
use crate::pull_request::compare_url;
use crate::runner::run_tests;
use crate::ui;

/// Arguments for the pull request workflow
///
/// Mirrors the CLI arguments without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct PrWorkflowArgs {
    /// Requested version bump
    pub bump: VersionBump,

    /// Remote to inspect and push to; falls back to the configured remote
    pub remote: Option<String>,

    /// Do not run the project's tests
    pub skip_tests: bool,

    /// Compute everything but leave manifests and the remote untouched
    pub dry_run: bool,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub next_version: String,
    pub source: VersionSource,
    pub is_initial_release: bool,
    /// Manifests were rewritten with the next version
    pub manifest_updated: bool,
    /// The version bump commit was pushed
    pub pushed: bool,
    pub pull_request_url: String,
    pub warnings: Vec<BoundaryWarning>,
}

fn warn(warnings: &mut Vec<BoundaryWarning>, warning: BoundaryWarning) {
    ui::display_boundary_warning(&warning);
    warnings.push(warning);
}

/// Latest release tag, or `None` with a warning when there is none or the
/// tags cannot be listed
fn latest_release_tag<R: Repository + ?Sized>(
    repo: &R,
    warnings: &mut Vec<BoundaryWarning>,
) -> Option<ReleaseTag> {
    let names = match repo.tag_names() {
        Ok(names) => names,
        Err(e) => {
            warn(
                warnings,
                BoundaryWarning::TagListingFailed {
                    reason: e.to_string(),
                },
            );
            return None;
        }
    };
    let latest = select_latest(names);
    if latest.is_none() {
        warn(warnings, BoundaryWarning::NoReleaseTag);
    }
    latest
}

/// Main pull request workflow
///
/// 1. Inspect the repository and check it is ready for a pull request
/// 2. Detect the project and its declared version
/// 3. Run the project's tests
/// 4. Find the latest release tag and decide the next version
/// 5. Rewrite the manifests, commit and push when the version changed
/// 6. Build the pull request link
///
/// `root` is the project directory whose manifests are inspected.
pub fn run_pr_workflow<R: Repository + ?Sized>(
    repo: &R,
    root: &Path,
    args: &PrWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let remote = args.remote.as_deref().unwrap_or(&config.remote);
    let mut warnings = Vec::new();

    ui::display_status("Checking if repository is clean and up to date...");
    let state = inspect(repo, remote)?;
    state.ensure_ready()?;
    ui::display_success("Repository is clean and up to date");

    ui::display_status("Getting project info...");
    let mut descriptor = ProjectDescriptor::detect(root)?;
    if let Some(raw) = descriptor.unparsable_version() {
        let warning = BoundaryWarning::UnparsableDeclaredVersion {
            version: raw.to_string(),
            manifest: descriptor.display_paths(),
        };
        warn(&mut warnings, warning);
    }
    let declared = descriptor.declared_version().cloned();
    ui::display_success(&format!(
        "Project version is {} ({})",
        declared
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "not set".to_string()),
        descriptor.ecosystem()
    ));

    if config.tests.enabled && !args.skip_tests {
        ui::display_status("Running tests...");
        run_tests(descriptor.ecosystem(), root, &config.tests)?;
        ui::display_success("All tests passed");
    } else {
        ui::display_status("Skipping tests");
    }

    ui::display_status("Finding latest release tag...");
    let latest_tag = latest_release_tag(repo, &mut warnings);
    if let Some(tag) = &latest_tag {
        ui::display_success(&format!("Latest release tag is {}", tag.name));
        if let Some(declared) = declared.as_ref().filter(|d| **d > tag.version) {
            let warning = BoundaryWarning::DeclaredVersionAhead {
                declared: declared.to_string(),
                tag: tag.name.clone(),
            };
            warn(&mut warnings, warning);
        }
    }

    let decision = decide(
        latest_tag.as_ref().map(|tag| &tag.version),
        declared.as_ref(),
        args.bump,
    );
    let next_version = decision.version.to_string();
    info!(version = %next_version, source = %decision.source, "decided next version");
    ui::display_success(&format!(
        "Next version is {} (determined from {}){}",
        next_version,
        decision.source,
        if decision.is_initial_release {
            ", this is the initial release"
        } else {
            ""
        }
    ));

    let mut manifest_updated = false;
    let mut pushed = false;
    let paths = descriptor.display_paths();
    let commit_message = config.commit.message_for(&next_version);

    if declared.as_ref() == Some(&decision.version) {
        ui::display_success(&format!(
            "{}-project version in {} is already up to date",
            descriptor.ecosystem(),
            paths
        ));
    } else if args.dry_run {
        ui::display_dry_run_plan(&paths, &next_version, &commit_message);
    } else {
        let old = declared.as_ref().map(|v| v.to_string());
        ui::display_version_change(old.as_deref(), &next_version);

        ui::display_status(&format!("Updating {} to {}...", paths, next_version));
        descriptor.write_version(&next_version)?;
        manifest_updated = true;
        ui::display_success(&format!(
            "{}-project version in {} updated to {}",
            descriptor.ecosystem(),
            paths,
            next_version
        ));

        ui::display_status("Committing version update and pushing to remote...");
        repo.commit_all(&commit_message)?;
        repo.push_branch(remote, &state.current_branch)?;
        pushed = true;
        ui::display_success("Version update committed and pushed to remote");
    }

    let pull_request_url = compare_url(
        &state.normalized_hosted_url,
        &state.default_branch,
        &state.current_branch,
        &config.pull_request.title,
        &config.pull_request.body,
    );

    Ok(WorkflowResult {
        next_version,
        source: decision.source,
        is_initial_release: decision.is_initial_release,
        manifest_updated,
        pushed,
        pull_request_url,
        warnings,
    })
}
