//! Core traced error types

use crate::stack::StackSnapshot;
use thiserror::Error;

/// An error carrying an optional annotation and the call stack of its wrap site
///
/// The wrapped value is never modified. It is reachable through
/// [`inner`](TracedError::inner), [`into_inner`](TracedError::into_inner)
/// and [`std::error::Error::source`].
#[derive(Clone)]
pub struct TracedError<E> {
    /// The wrapped error
    pub(super) underlying: E,
    /// Annotation, empty when none was given
    pub(super) message: String,
    /// Stack captured at construction
    pub(super) stack: StackSnapshot,
}

/// Plain text error produced by the formatting constructors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{0}")]
pub struct Message(pub(crate) String);

impl Message {
    /// Error with the given text
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// The text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
