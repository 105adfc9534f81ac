//! Extension traits for `Result` and `Option<TracedError>`

use super::constructors::ENTRY_FRAMES;
use super::types::TracedError;
use crate::config::Tracer;
use crate::stack::StackSnapshot;
use std::fmt;

/// Attach traces to the error side of a `Result`
///
/// `Ok` values pass through untouched and capture nothing.
pub trait ResultExt<T, E> {
    /// Wrap the error with no message
    fn traced(self) -> Result<T, TracedError<E>>;

    /// Wrap the error with an annotation
    fn wrap_err<S: Into<String>>(self, message: S) -> Result<T, TracedError<E>>;

    /// Wrap the error with a lazily built annotation
    fn wrap_err_with<S, F>(self, message: F) -> Result<T, TracedError<E>>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline(never)]
    fn traced(self) -> Result<T, TracedError<E>> {
        match self {
            Ok(value) => Ok(value),
            Err(underlying) => {
                let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
                Err(TracedError::from_parts(underlying, String::new(), stack))
            }
        }
    }

    #[inline(never)]
    fn wrap_err<S: Into<String>>(self, message: S) -> Result<T, TracedError<E>> {
        match self {
            Ok(value) => Ok(value),
            Err(underlying) => {
                let message = message.into();
                let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
                Err(TracedError::from_parts(underlying, message, stack))
            }
        }
    }

    #[inline(never)]
    fn wrap_err_with<S, F>(self, message: F) -> Result<T, TracedError<E>>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        match self {
            Ok(value) => Ok(value),
            Err(underlying) => {
                let message = message().into();
                let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
                Err(TracedError::from_parts(underlying, message, stack))
            }
        }
    }
}

/// Rendering on a possibly absent traced error
///
/// `None` renders as an empty string.
pub trait TracedOptionExt {
    /// Description, or `""` for `None`
    fn describe(&self) -> String;

    /// Rendered stack, or `""` for `None`
    fn trace_text(&self) -> String;
}

impl<E: fmt::Display> TracedOptionExt for Option<TracedError<E>> {
    fn describe(&self) -> String {
        self.as_ref().map(TracedError::describe).unwrap_or_default()
    }

    fn trace_text(&self) -> String {
        self.as_ref().map(TracedError::trace_text).unwrap_or_default()
    }
}

impl<E: fmt::Display> TracedOptionExt for Option<&TracedError<E>> {
    fn describe(&self) -> String {
        self.map(TracedError::describe).unwrap_or_default()
    }

    fn trace_text(&self) -> String {
        self.map(TracedError::trace_text).unwrap_or_default()
    }
}
