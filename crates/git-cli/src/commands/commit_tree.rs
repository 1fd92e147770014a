use std::io::Write;

use anyhow::Result;
use clap::Args;
use git_hash::ObjectId;
use git_repository::Repository;
use git_revwalk::TreeResolver;

use super::object_id_arg;
use crate::render;

#[derive(Args)]
pub struct CommitTreeArgs {
    /// Full 40-digit id of a commit
    #[arg(value_parser = object_id_arg)]
    pub commit: ObjectId,
}

pub fn run(args: &CommitTreeArgs, repo: &Repository, out: &mut impl Write) -> Result<i32> {
    let commit = repo.objects().read_commit(&args.commit)?;
    let tree = TreeResolver::new(repo.objects()).resolve(&commit.tree)?;
    render::tree_paths(out, &tree)?;
    Ok(0)
}
