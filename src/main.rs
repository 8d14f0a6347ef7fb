use anyhow::Result;
use clap::Parser;
use regcheck::commands::config::{DEFAULT_TIMEOUT_SECS, Options};
use std::path::PathBuf;
use std::process::ExitCode;

/// regcheck - package registry validator
///
/// Checks that index.json and packages/*.json agree with each other, that each
/// package descriptor is well formed, and that every download URL answers a
/// HEAD request with 200.
///
/// Exits with 0 when the registry is valid and 1 on any error. Warnings alone
/// do not fail the run.
///
/// Examples:
///   regcheck                      # Validate the registry in the current directory
///   regcheck --root ./registry    # Validate a registry elsewhere
///   regcheck --offline            # Skip download URL checks
#[derive(Parser, Debug)]
#[command(author, version = env!("REGCHECK_VERSION"), about)]
struct Cli {
    /// Registry root directory containing index.json and packages/
    #[arg(long, short = 'r', env = "REGCHECK_ROOT", value_name = "PATH")]
    root: Option<PathBuf>,

    /// Index file (defaults to <ROOT>/index.json)
    #[arg(long, env = "REGCHECK_INDEX", value_name = "FILE")]
    index: Option<PathBuf>,

    /// Package descriptor directory (defaults to <ROOT>/packages)
    #[arg(long, env = "REGCHECK_PACKAGES", value_name = "DIR")]
    packages: Option<PathBuf>,

    /// Timeout for each download URL check, in seconds
    #[arg(
        long,
        env = "REGCHECK_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Skip download URL checks
    #[arg(long, env = "REGCHECK_OFFLINE")]
    offline: bool,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options {
            root: cli.root,
            index: cli.index,
            packages: cli.packages,
            timeout_secs: cli.timeout,
            offline: cli.offline,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = regcheck::runtime::RealRuntime;

    let summary = regcheck::commands::run(runtime, cli.into()).await?;
    Ok(summary.exit_code())
}
