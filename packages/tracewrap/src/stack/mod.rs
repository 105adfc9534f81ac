//! Call-stack snapshots
//!
//! A [`StackSnapshot`] holds the raw program locations captured when a
//! [`TracedError`](crate::TracedError) is built. Locations are resolved into
//! [`Frame`]s the first time they are rendered and the result is cached.

mod capture;
mod render;

use once_cell::sync::OnceCell;
use std::fmt;

/// Placeholder for a function or file that could not be resolved
pub const UNKNOWN: &str = "<unknown>";

/// Ordered caller locations, innermost first
#[derive(Clone)]
pub struct StackSnapshot {
    /// Raw locations as captured
    pub(crate) frames: Vec<backtrace::Frame>,
    /// Resolved frames, filled on first use
    pub(crate) resolved: OnceCell<Vec<Frame>>,
}

/// A resolved stack entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Demangled function name without the trailing hash
    pub function: String,
    /// Source file path
    pub file: String,
    /// Line number, `0` when unknown
    pub line: u32,
}

impl Frame {
    /// Frame for a location with no debug information
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            function: UNKNOWN.to_string(),
            file: UNKNOWN.to_string(),
            line: 0,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\t{}:{}\n", self.function, self.file, self.line)
    }
}

impl StackSnapshot {
    /// Number of captured locations
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolved.get().map_or(self.frames.len(), Vec::len)
    }

    /// Whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for StackSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackSnapshot")
            .field("len", &self.len())
            .field("resolved", &self.resolved.get().is_some())
            .finish()
    }
}
