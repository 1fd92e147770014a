use std::io::Write;

use anyhow::Result;
use clap::Args;
use git_repository::Repository;
use git_revwalk::first_parent_log;

use crate::render;

#[derive(Args)]
pub struct LogArgs {
    /// Branch whose history to show
    pub branch: String,
}

pub fn run(args: &LogArgs, repo: &Repository, out: &mut impl Write) -> Result<i32> {
    let branch = repo.refs().branch(&args.branch)?;
    // Walk to the root before printing so a broken chain produces no output.
    let entries = first_parent_log(repo.objects(), branch.head)?;
    for entry in &entries {
        render::log_entry(out, entry)?;
    }
    Ok(0)
}
