pub mod cat_file;
pub mod commit_tree;
pub mod list_branches;
pub mod log;

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;
use git_hash::ObjectId;
use git_repository::Repository;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the first-parent history of a branch
    Log(log::LogArgs),
    /// Print the type and content of an object
    CatFile(cat_file::CatFileArgs),
    /// List every file path in a commit's tree
    CommitTree(commit_tree::CommitTreeArgs),
    /// List branches, marking the current one
    ListBranches(list_branches::ListBranchesArgs),
}

/// Open the repository named by `--git-dir`/`GIT_DIR`, or discover one
/// upward from the current directory.
pub fn open_repo(git_dir: Option<&Path>) -> Result<Repository> {
    let repo = if let Some(git_dir) = git_dir {
        Repository::open(git_dir)?
    } else {
        Repository::discover(".")?
    };
    Ok(repo)
}

pub fn run(command: &Commands, repo: &Repository, out: &mut impl Write) -> Result<i32> {
    match command {
        Commands::Log(args) => log::run(args, repo, out),
        Commands::CatFile(args) => cat_file::run(args, repo, out),
        Commands::CommitTree(args) => commit_tree::run(args, repo, out),
        Commands::ListBranches(args) => list_branches::run(args, repo, out),
    }
}

/// Parse a full 40-digit object id in either case.
///
/// Abbreviated ids are not resolved.
pub fn parse_object_id(s: &str) -> Result<ObjectId> {
    let s = s.trim();
    match ObjectId::from_hex(s) {
        Ok(oid) => Ok(oid),
        Err(_) => bail!("invalid object id '{s}'"),
    }
}

/// clap adapter for [`parse_object_id`].
pub(crate) fn object_id_arg(s: &str) -> Result<ObjectId, String> {
    parse_object_id(s).map_err(|e| e.to_string())
}
