use std::io::Write;

use anyhow::Result;
use clap::Args;
use git_repository::Repository;

use crate::render;

#[derive(Args)]
pub struct ListBranchesArgs {}

pub fn run(_args: &ListBranchesArgs, repo: &Repository, out: &mut impl Write) -> Result<i32> {
    let branches = repo.refs().list_branches()?;
    render::branches(out, &branches)?;
    Ok(0)
}
