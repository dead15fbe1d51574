use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::config::TestsConfig;
use crate::error::{GitPrError, Result};
use crate::project::Ecosystem;

/// The test command configured for an ecosystem
pub fn test_command(ecosystem: Ecosystem, config: &TestsConfig) -> &[String] {
    match ecosystem {
        Ecosystem::NodePackage => &config.node_command,
        Ecosystem::DotnetProject => &config.dotnet_command,
    }
}

/// Run the project's test suite in `root`.
///
/// Output goes straight to the terminal. A command that cannot be started
/// or exits non-zero is a `TestsFailed` error.
pub fn run_tests(ecosystem: Ecosystem, root: &Path, config: &TestsConfig) -> Result<()> {
    let command = test_command(ecosystem, config);
    let (program, args) = command
        .split_first()
        .ok_or_else(|| GitPrError::config(format!("no test command for {}", ecosystem)))?;
    let command_line = command.join(" ");

    debug!(command = %command_line, root = %root.display(), "running tests");
    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .map_err(|e| GitPrError::TestsFailed(format!("cannot run `{}`: {}", command_line, e)))?;

    if !status.success() {
        return Err(GitPrError::TestsFailed(format!(
            "`{}` exited with code {}",
            command_line,
            status.code().unwrap_or(-1)
        )));
    }
    Ok(())
}
