//! Pure formatting functions for UI output.
//!
//! Everything the operator sees goes through here; core modules log through
//! `tracing` instead of printing.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version change about to be written.
///
/// Shows either "From: old -> To: new" or, when the manifest had no
/// version, just the new one.
pub fn display_version_change(old: Option<&str>, new: &str) {
    match old {
        Some(old) => {
            println!("\n{}", style("Version Change:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new).green());
        }
        None => {
            println!("\n{}", style("Initial Version:").bold());
            println!("  New version: {}", style(new).green());
        }
    }
}

/// Display the pull request link as the final line of output.
pub fn display_pull_request_link(link: &str) {
    println!("\n{} {}", style("Create your PR here:").bold(), link);
}

/// Display the commands that would have run in dry-run mode.
pub fn display_dry_run_plan(paths: &str, version: &str, commit_message: &str) {
    display_status("Dry run mode:");
    display_success(&format!("  Step 1: would update {} to {}", paths, version));
    display_success(&format!("  Step 2: would commit \"{}\"", commit_message));
    display_success("  Step 3: would push the current branch");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_boundary_warning(&BoundaryWarning::NoReleaseTag);
        display_version_change(Some("1.0.0"), "1.1.0");
        display_version_change(None, "1.0.0");
    }
}
