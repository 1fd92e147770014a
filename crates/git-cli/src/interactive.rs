//! Prompt-driven mode, used when no subcommand is given.
//!
//! Each command asks for its single parameter on the following line. A
//! failing command is reported on stderr and the session continues.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Result};
use git_repository::Repository;
use tracing::debug;

use crate::commands::{
    self, cat_file::CatFileArgs, commit_tree::CommitTreeArgs, list_branches::ListBranchesArgs,
    log::LogArgs, Commands,
};

pub fn run(git_dir: Option<&Path>, mut input: impl BufRead, out: &mut impl Write) -> Result<i32> {
    let repo = match git_dir {
        Some(dir) => Repository::open(dir)?,
        None => {
            let Some(dir) = ask(&mut input, out, "Enter .git directory location:")? else {
                return Ok(0);
            };
            Repository::open(dir.trim())?
        }
    };

    loop {
        let Some(line) = ask(&mut input, out, "Enter command:")? else {
            break;
        };
        let name = line.trim();
        if matches!(name, "" | "exit" | "quit") {
            break;
        }
        debug!(command = name, "interactive command");

        let result = read_command(name, &mut input, out)
            .and_then(|command| commands::run(&command, &repo, out));
        if let Err(e) = result {
            out.flush()?;
            eprintln!("error: {e}");
        }
    }
    Ok(0)
}

/// Prompt for the parameters of `name` and build the command.
fn read_command(name: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<Commands> {
    let command = match name {
        "log" => Commands::Log(LogArgs {
            branch: ask_param(input, out, "Enter branch name:")?,
        }),
        "cat-file" => Commands::CatFile(CatFileArgs {
            object: commands::parse_object_id(&ask_param(input, out, "Enter git object hash:")?)?,
            verify: false,
        }),
        "commit-tree" => Commands::CommitTree(CommitTreeArgs {
            commit: commands::parse_object_id(&ask_param(input, out, "Enter commit-hash:")?)?,
        }),
        "list-branches" => Commands::ListBranches(ListBranchesArgs {}),
        other => bail!("unknown command '{other}'"),
    };
    Ok(command)
}

fn ask_param(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> Result<String> {
    match ask(input, out, prompt)? {
        Some(line) => Ok(line.trim().to_string()),
        None => bail!("unexpected end of input"),
    }
}

/// Print `prompt` and read one line. `None` at end of input.
fn ask(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<Option<String>> {
    writeln!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
