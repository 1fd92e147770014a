//! Text output for each command.
//!
//! Payload bytes (blob content, names, message lines) are written as-is,
//! without UTF-8 conversion.

use std::io::{self, Write};

use git_object::{Blob, Commit, Tree};
use git_ref::BranchList;
use git_revwalk::{LogEntry, ResolvedTree};

/// One log entry followed by a blank line.
pub fn log_entry(out: &mut impl Write, entry: &LogEntry) -> io::Result<()> {
    if entry.merged {
        writeln!(out, "Commit: {} (merged)", entry.oid)?;
    } else {
        writeln!(out, "Commit: {}", entry.oid)?;
    }
    writeln!(out, "{}", entry.commit.committer_line())?;
    message(out, &entry.commit)?;
    writeln!(out)
}

pub fn commit_full(out: &mut impl Write, commit: &Commit) -> io::Result<()> {
    writeln!(out, "tree: {}", commit.tree)?;
    if !commit.parents.is_empty() {
        let parents: Vec<String> = commit.parents.iter().map(|p| p.to_hex()).collect();
        writeln!(out, "parents: {}", parents.join(" | "))?;
    }
    writeln!(out, "author: {}", commit.author_line())?;
    writeln!(out, "committer: {}", commit.committer_line())?;
    if !commit.message_lines.is_empty() {
        writeln!(out, "commit message:")?;
        message(out, commit)?;
    }
    Ok(())
}

fn message(out: &mut impl Write, commit: &Commit) -> io::Result<()> {
    for line in &commit.message_lines {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

pub fn blob(out: &mut impl Write, blob: &Blob) -> io::Result<()> {
    out.write_all(&blob.data)?;
    if !blob.data.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// `<mode> <hash> <name>` for each entry of a single tree object.
pub fn tree_entries(out: &mut impl Write, tree: &Tree) -> io::Result<()> {
    for entry in tree.iter() {
        write!(out, "{} {} ", entry.mode, entry.oid)?;
        out.write_all(&entry.name)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

pub fn tree_paths(out: &mut impl Write, tree: &ResolvedTree) -> io::Result<()> {
    for path in tree.summary_paths() {
        out.write_all(&path)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

pub fn branches(out: &mut impl Write, list: &BranchList) -> io::Result<()> {
    for name in &list.names {
        let marker = if list.is_current(name) { "* " } else { "  " };
        writeln!(out, "{marker}{name}")?;
    }
    Ok(())
}
