use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_pr::cli::{run_pr_workflow, PrWorkflowArgs};
use git_pr::config;
use git_pr::domain::VersionBump;
use git_pr::git::Git2Repository;
use git_pr::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-pr",
    about = "Bump the project version and open a GitHub pull request"
)]
struct Args {
    #[arg(value_enum, help = "Type of change: patch, minor or major")]
    bump: Option<VersionBump>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Remote to inspect and push to")]
    remote: Option<String>,

    #[arg(long, help = "Do not run the project's tests")]
    skip_tests: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("git_pr={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-pr {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(args.verbose);

    let Some(bump) = args.bump else {
        ui::display_error("Please specify the type of PR: patch, minor, or major");
        std::process::exit(1);
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let root = std::env::current_dir()?;
    let repo = match Git2Repository::open(&root) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = PrWorkflowArgs {
        bump,
        remote: args.remote,
        skip_tests: args.skip_tests,
        dry_run: args.dry_run,
    };

    match run_pr_workflow(&repo, &root, &workflow_args, &config) {
        Ok(result) => {
            ui::display_pull_request_link(&ui::clickable_link(&result.pull_request_url));
            Ok(())
        }
        Err(e) => {
            tracing::debug!(category = ?e.category(), "workflow failed");
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
