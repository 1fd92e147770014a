/// Coarse classification shared by every crate's error type.
///
/// Commands use it to report a failure without matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced object has no file in the store.
    ObjectNotFound,
    /// An object failed to inflate or does not have the expected shape.
    CorruptObject,
    /// `HEAD` or a branch file does not have the expected single-line shape.
    MalformedRef,
    /// A ref, directory or argument named by the caller does not exist or is invalid.
    InvalidInput,
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ObjectNotFound => "object not found",
            Self::CorruptObject => "corrupt object",
            Self::MalformedRef => "malformed ref",
            Self::InvalidInput => "invalid input",
            Self::Io => "i/o error",
        })
    }
}

/// Base error type for git-utils operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error("date parse error: {0}")]
    DateParse(String),

    #[error("signature parse error: {0}")]
    SignatureParse(String),
}
