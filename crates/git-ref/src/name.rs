use std::fmt;

use bstr::ByteSlice;

use crate::error::RefError;

/// A validated branch name: the part after `refs/heads/`.
///
/// Rejects anything `git check-ref-format --branch` would, so a name can
/// never escape the `refs/heads` directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BranchName(String);

/// Characters forbidden anywhere in a ref name.
const FORBIDDEN_CHARS: &[u8] = b" ~^:?*[\\";

impl BranchName {
    pub fn new(name: impl Into<String>) -> Result<Self, RefError> {
        let name = name.into();
        validate(name.as_bytes()).map_err(|reason| {
            RefError::InvalidName(format!("'{name}': {reason}"))
        })?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The full ref name, e.g. `refs/heads/main`.
    pub fn full_name(&self) -> String {
        format!("refs/heads/{}", self.0)
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn validate(name: &[u8]) -> Result<(), String> {
    if name.is_empty() {
        return Err("empty".into());
    }
    if name == b"@" || name == b"HEAD" || name.starts_with(b"-") {
        return Err("reserved name".into());
    }
    if let Some(i) = name.iter().position(|&b| b < 0x20 || b == 0x7f) {
        return Err(format!("control character at position {i}"));
    }
    if let Some(i) = name.iter().position(|b| FORBIDDEN_CHARS.contains(b)) {
        return Err(format!(
            "forbidden character '{}' at position {i}",
            name[i] as char
        ));
    }
    if name.starts_with(b"/") || name.ends_with(b"/") || name.contains_str("//") {
        return Err("empty path component".into());
    }
    if name.contains_str("..") || name.contains_str("@{") {
        return Err("forbidden sequence".into());
    }
    for component in name.split_str("/") {
        if component.starts_with(b".") || component.ends_with(b".lock") {
            return Err("component starts with '.' or ends with '.lock'".into());
        }
    }
    if name.ends_with(b".") {
        return Err("ends with '.'".into());
    }
    Ok(())
}
