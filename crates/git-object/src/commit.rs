use bstr::{BStr, BString, ByteSlice};
use git_hash::ObjectId;
use git_utils::date::Signature;

use crate::ObjectError;

/// A git commit object.
///
/// Only the fields the reader renders are decoded. Header lines it does not
/// interpret (`encoding`, `gpgsig`, `mergetag`, ...) are kept in
/// `message_lines` alongside the message text, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// OID of the root tree.
    pub tree: ObjectId,
    /// Parent commit OIDs in file order; `parents[0]` is the main line.
    pub parents: Vec<ObjectId>,
    pub author: Signature,
    pub committer: Signature,
    /// Non-blank lines that are not `tree`/`parent`/`author`/`committer` headers.
    pub message_lines: Vec<BString>,
}

impl Commit {
    /// Parse commit content from raw bytes (no object header).
    ///
    /// NUL bytes are treated as line breaks and blank lines are dropped.
    /// Every other line is classified by its first word wherever it appears:
    /// `tree`, `parent`, `author` and `committer` set the matching field (a
    /// later `tree`, `author` or `committer` replaces an earlier one). A
    /// keyword line whose value does not parse, and any line with another
    /// first word, is kept as message text.
    pub fn parse(content: &[u8]) -> Result<Self, ObjectError> {
        let normalized: Vec<u8> = content
            .iter()
            .map(|&b| if b == 0 { b'\n' } else { b })
            .collect();

        let mut tree: Option<ObjectId> = None;
        let mut parents = Vec::new();
        let mut author: Option<Signature> = None;
        let mut committer: Option<Signature> = None;
        let mut message_lines = Vec::new();

        for line in normalized.split_str("\n") {
            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = match line.find_byte(b' ') {
                Some(space) => (&line[..space], &line[space + 1..]),
                None => (line, &b""[..]),
            };

            let recognized = match key {
                b"tree" => parse_oid(value).map(|oid| tree = Some(oid)),
                b"parent" => parse_oid(value).map(|oid| parents.push(oid)),
                b"author" => parse_signature(value).map(|sig| author = Some(sig)),
                b"committer" => parse_signature(value).map(|sig| committer = Some(sig)),
                _ => None,
            };
            if recognized.is_none() {
                message_lines.push(BString::from(line));
            }
        }

        Ok(Self {
            tree: tree.ok_or(ObjectError::MissingCommitField { field: "tree" })?,
            parents,
            author: author.ok_or(ObjectError::MissingCommitField { field: "author" })?,
            committer: committer
                .ok_or(ObjectError::MissingCommitField { field: "committer" })?,
            message_lines,
        })
    }

    /// Get the first parent (or None for root commits).
    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    /// The second parent of a merge: the side that was merged in.
    pub fn merge_parent(&self) -> Option<&ObjectId> {
        self.parents.get(1)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// First message line, or an empty string for a message-less commit.
    pub fn summary(&self) -> &BStr {
        self.message_lines
            .first()
            .map(|l| l.as_bstr())
            .unwrap_or_else(|| BStr::new(""))
    }

    /// `"<name> <email> original timestamp: <date>"`
    pub fn author_line(&self) -> String {
        self.author.render("original")
    }

    /// `"<name> <email> commit timestamp: <date>"`
    pub fn committer_line(&self) -> String {
        self.committer.render("commit")
    }
}

fn parse_oid(value: &[u8]) -> Option<ObjectId> {
    let hex = std::str::from_utf8(value.trim()).ok()?;
    ObjectId::from_hex(hex).ok()
}

fn parse_signature(value: &[u8]) -> Option<Signature> {
    Signature::parse(BStr::new(value)).ok()
}
