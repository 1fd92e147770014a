use std::io::Write;

use anyhow::Result;
use clap::Args;
use git_hash::ObjectId;
use git_object::Object;
use git_repository::Repository;

use super::object_id_arg;
use crate::render;

#[derive(Args)]
pub struct CatFileArgs {
    /// Full 40-digit object id
    #[arg(value_parser = object_id_arg)]
    pub object: ObjectId,

    /// Check that the object content hashes to its id
    #[arg(long)]
    pub verify: bool,
}

pub fn run(args: &CatFileArgs, repo: &Repository, out: &mut impl Write) -> Result<i32> {
    let object = if args.verify {
        repo.objects().read_verified(&args.object)?
    } else {
        repo.objects().read(&args.object)?
    };

    writeln!(out, "{}", object.kind().banner())?;
    match &object {
        Object::Blob(blob) => render::blob(out, blob)?,
        Object::Tree(tree) => render::tree_entries(out, tree)?,
        Object::Commit(commit) => render::commit_full(out, commit)?,
    }
    Ok(0)
}
