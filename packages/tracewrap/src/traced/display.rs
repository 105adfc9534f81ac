//! Rendering and trait implementations for `TracedError`

use super::types::TracedError;
use crate::stack::Frame;
use std::fmt;

impl<E: fmt::Display> TracedError<E> {
    /// `"<message>: <underlying>"`, or just `"<underlying>"` without a message
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<E> TracedError<E> {
    /// The captured stack, one `"<function>\n\t<file>:<line>\n"` entry per frame
    #[must_use]
    pub fn trace_text(&self) -> String {
        self.stack.render()
    }

    /// Resolved frames, innermost first
    pub fn frames(&self) -> &[Frame] {
        self.stack.frames()
    }
}

impl<E: fmt::Display> fmt::Display for TracedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            write!(f, "{}: ", self.message)?;
        }
        write!(f, "{}", self.underlying)
    }
}

impl<E: fmt::Display> fmt::Debug for TracedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")?;
        if !self.stack.is_empty() {
            write!(f, "\n\nStack trace:\n{}", self.trace_text())?;
        }
        Ok(())
    }
}

impl<E> std::error::Error for TracedError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.underlying)
    }
}
