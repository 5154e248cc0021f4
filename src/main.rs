use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use rn_version_sync::{SyncOptions, logging, sync_versions};

#[derive(Parser)]
#[command(name = "rn-version-sync")]
#[command(version, about = "Sync React Native version with native code")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Override version code (default: calculated from semver as 10000*major + 100*minor + patch)
    #[arg(
        long,
        value_name = "CODE",
        allow_negative_numbers = true,
        value_parser = parse_version_code
    )]
    version_code: Option<i64>,

    /// React Native project root (default: current directory)
    #[arg(long, value_name = "PATH")]
    project_root: Option<PathBuf>,
}

fn parse_version_code(value: &str) -> Result<i64, String> {
    value
        .parse()
        .map_err(|_| "version-code must be a valid number".to_string())
}

/// First line of a clap error without its `error: ` prefix
fn usage_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let project_root = match cli.project_root {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let options = SyncOptions::default()
        .verbose(cli.verbose)
        .version_code(cli.version_code);

    sync_versions(&project_root, &options)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version render to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", usage_error_message(&e));
            return ExitCode::FAILURE;
        }
    };
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => {
            println!("✓ Version sync completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
