mod commands;
mod interactive;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use tracing_subscriber::EnvFilter;

use commands::Commands;

/// Environment variable holding the log filter, e.g. `git_loose=trace`.
const LOG_ENV: &str = "GIT_INTERNALS_LOG";

#[derive(Parser)]
#[command(
    name = "git-internals",
    about = "Inspect the loose objects, history and branches of a git directory",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Command to run. Without one, commands are read from stdin.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Set the path to the .git directory
    #[arg(long = "git-dir", env = "GIT_DIR", global = true)]
    git_dir: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(128),
            }
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(128);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let Some(command) = &cli.command else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return interactive::run(cli.git_dir.as_deref(), stdin.lock(), &mut stdout.lock());
    };

    let repo = commands::open_repo(cli.git_dir.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = commands::run(command, &repo, &mut out)?;
    out.flush()?;
    Ok(code)
}
