//! core/error.rs
//!
//! One error type for the whole core.
//!
//! Every variant is recoverable: the batch layer logs it and moves on to the
//! next file (or the next tag assignment).

use std::fmt;

use thiserror::Error;

/// Why a raw tag value could not be turned into a usable `TypedValue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueIssue {
    /// Integer tag, but the text isn't a base-10 number.
    NotANumber(String),
    /// Integer tag, the text is numeric but doesn't fit.
    OutOfRange(String),
    /// The tag has no known value type (usually: unknown tag name).
    UnknownType,
}

impl fmt::Display for ValueIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueIssue::NotANumber(raw) => write!(f, "invalid integer value: {raw}"),
            ValueIssue::OutOfRange(raw) => write!(f, "integer string out of range: {raw}"),
            ValueIssue::UnknownType => f.write_str("unknown tag type"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TagError {
    #[error("unsupported file type: `{0}'")]
    UnsupportedFileType(String),

    #[error("could not open file: `{path}': {reason}")]
    CorruptOrUnreadableFile { path: String, reason: String },

    #[error("could not scan `{path}': {source}")]
    ScanFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("no tags in file: `{0}'")]
    NoTagsPresent(String),

    #[error("broken tag definition: `{0}'")]
    MalformedTagAssignment(String),

    #[error("unknown tag: `{0}'")]
    UnknownTagName(String),

    #[error("invalid value for tag `{tag}': {issue}")]
    InvalidTagValue { tag: String, issue: ValueIssue },

    #[error("tag type `{tag_impl}' is not supported for file type `{file_type}'")]
    ImplNotAllowed { file_type: String, tag_impl: String },

    #[error("broken tag type selector: `{0}' (expected TYPE=IMPL[,IMPL...])")]
    MalformedPolicySelector(String),

    #[error("unknown file type: `{0}'")]
    UnknownFileTypeName(String),

    #[error("unknown tag type: `{0}'")]
    UnknownTagImplName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TagError>;
