use bstr::{BString, ByteSlice};
use git_hash::{ObjectId, DIGEST_LEN};

use crate::ObjectError;

/// A single entry in a git tree object.
///
/// The mode is kept as the ASCII bytes found on disk (`100644`, `40000`, ...).
/// Whether the entry names a directory is decided by looking the object up,
/// not by the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: BString,
    pub name: BString,
    pub oid: ObjectId,
}

/// A git tree object: the entries of one directory, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    pub entries: Vec<TreeEntry>,
}

/// Smallest number of bytes that can still hold an entry: a separator,
/// the NUL and the raw id.
const MIN_ENTRY_TAIL: usize = 1 + DIGEST_LEN;

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse tree content from binary format.
    ///
    /// Each entry is `<mode><whitespace><name>\0<20 raw id bytes>`. Parsing
    /// stops once the cursor reaches the end; a tail shorter than a complete
    /// entry is an error.
    pub fn parse(content: &[u8]) -> Result<Self, ObjectError> {
        let mut entries = Vec::new();
        let mut pos = 0;

        while pos < content.len() {
            let rest = &content[pos..];
            if rest.len() < MIN_ENTRY_TAIL {
                return Err(ObjectError::TrailingTreeBytes {
                    offset: pos,
                    remaining: rest.len(),
                });
            }

            let ws = rest
                .iter()
                .position(u8::is_ascii_whitespace)
                .ok_or_else(|| ObjectError::InvalidTreeEntry {
                    offset: pos,
                    reason: "missing separator after mode".into(),
                })?;
            if ws == 0 {
                return Err(ObjectError::InvalidTreeEntry {
                    offset: pos,
                    reason: "empty mode".into(),
                });
            }

            let name_start = ws + 1;
            let nul = rest[name_start..]
                .find_byte(0)
                .map(|p| p + name_start)
                .ok_or_else(|| ObjectError::InvalidTreeEntry {
                    offset: pos + name_start,
                    reason: "missing null after name".into(),
                })?;

            let oid_start = nul + 1;
            let oid_end = oid_start + DIGEST_LEN;
            if oid_end > rest.len() {
                return Err(ObjectError::InvalidTreeEntry {
                    offset: pos + oid_start,
                    reason: "truncated object id".into(),
                });
            }

            entries.push(TreeEntry {
                mode: BString::from(&rest[..ws]),
                name: BString::from(&rest[name_start..nul]),
                oid: ObjectId::from_bytes(&rest[oid_start..oid_end])?,
            });
            pos += oid_end;
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
