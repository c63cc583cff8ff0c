//! Error types for binding resolution and list access.
//!
//! Nothing here is caught or logged inside the crate: every error returns
//! to the immediate caller.

use core::fmt;

use thiserror::Error;

/// A widget capability a codec requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Checkable,
    TextEdit,
    Numeric,
    ItemView,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkable => write!(f, "checkable"),
            Self::TextEdit => write!(f, "text-edit"),
            Self::Numeric => write!(f, "numeric"),
            Self::ItemView => write!(f, "item-view"),
        }
    }
}

/// Row access failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// No row at `index`, or the row vanished under a handle.
    #[error("List index out of range")]
    OutOfRange { index: usize, len: usize },
    /// `pop` past the end, or the model refused the removal.
    #[error("cannot remove row from model")]
    RemoveRejected { index: usize },
    /// The model refused to append a row.
    #[error("could not add row")]
    InsertRejected { row: usize },
}

/// Failure of a [`Codec`](crate::Codec) against a resolved widget.
///
/// [`WidgetProperty`](crate::WidgetProperty) attaches the binding path and
/// reports these as [`BindError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("widget is not {0}")]
    Missing(Capability),
    #[error("codec does not support writing")]
    ReadOnly,
}

/// Errors from reading or writing a [`WidgetProperty`](crate::WidgetProperty).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A path segment does not exist on its owner.
    #[error("cannot resolve `{path}`: no attribute `{segment}`")]
    Resolution { path: String, segment: String },
    /// A non-final path segment named a widget instead of an owner.
    #[error("cannot resolve `{path}`: `{segment}` is a widget, not an attribute owner")]
    NotAnOwner { path: String, segment: String },
    /// The final path segment named an owner instead of a widget.
    #[error("cannot resolve `{path}`: it names an attribute owner, not a widget")]
    NotAWidget { path: String },
    /// The widget lacks the capability the binding's codec needs.
    #[error("`{path}` is not a {expected} widget")]
    Capability { path: String, expected: Capability },
    /// Write attempted on a read-only binding.
    #[error("`{path}` is read-only")]
    Unsupported { path: String },
    #[error(transparent)]
    Index(#[from] IndexError),
}

impl BindError {
    /// Whether this error came from resolving the binding path.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::Resolution { .. }
                | Self::NotAnOwner { .. }
                | Self::NotAWidget { .. }
                | Self::Capability { .. }
        )
    }

    pub(crate) fn from_codec(err: CodecError, path: &str) -> Self {
        match err {
            CodecError::Missing(expected) => Self::Capability {
                path: path.to_owned(),
                expected,
            },
            CodecError::ReadOnly => Self::Unsupported {
                path: path.to_owned(),
            },
        }
    }
}
