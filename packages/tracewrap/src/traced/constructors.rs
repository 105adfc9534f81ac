//! Traced error constructors
//!
//! Every public constructor is `#[inline(never)]` and calls
//! `StackSnapshot::capture` directly with a skip of one, so the recorded
//! trace starts at the constructor's caller.

use super::types::{Message, TracedError};
use crate::config::Tracer;
use crate::stack::StackSnapshot;
use std::fmt::{self, Write as _};

/// Frames between `StackSnapshot::capture` and user code
pub(crate) const ENTRY_FRAMES: usize = 1;

/// Render format arguments, keeping whatever was written if a `Display`
/// implementation reports an error
pub(crate) fn format_message(args: fmt::Arguments<'_>) -> String {
    if let Some(text) = args.as_str() {
        return text.to_string();
    }
    let mut out = String::new();
    let _ = out.write_fmt(args);
    out
}

impl<E> TracedError<E> {
    /// Assemble from an already captured snapshot
    pub(crate) fn from_parts(underlying: E, message: String, stack: StackSnapshot) -> Self {
        Self {
            underlying,
            message,
            stack,
        }
    }

    /// Wrap `underlying` with the default tracer and no message
    #[inline(never)]
    #[must_use]
    pub fn new(underlying: E) -> Self {
        let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
        Self::from_parts(underlying, String::new(), stack)
    }

    /// Wrap `underlying` with the default tracer and an annotation
    #[inline(never)]
    #[must_use]
    pub fn with_message<S: Into<String>>(underlying: E, message: S) -> Self {
        let message = message.into();
        let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
        Self::from_parts(underlying, message, stack)
    }

    /// The annotation, if one was given
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    /// The wrapped error
    #[must_use]
    pub const fn inner(&self) -> &E {
        &self.underlying
    }

    /// Consume the wrapper and return the wrapped error
    #[must_use]
    pub fn into_inner(self) -> E {
        self.underlying
    }

    /// The stack captured at construction
    #[must_use]
    pub const fn stack(&self) -> &StackSnapshot {
        &self.stack
    }
}

impl Tracer {
    /// Wrap an error with no message; `None` stays `None`
    #[inline(never)]
    #[must_use]
    pub fn traced<E>(&self, underlying: Option<E>) -> Option<TracedError<E>> {
        let underlying = underlying?;
        let stack = StackSnapshot::capture(self.max_depth(), ENTRY_FRAMES);
        Some(TracedError::from_parts(underlying, String::new(), stack))
    }

    /// Build a [`Message`] error from format arguments; never `None`
    #[inline(never)]
    #[must_use]
    pub fn traced_formatted(&self, args: fmt::Arguments<'_>) -> TracedError<Message> {
        let underlying = Message(format_message(args));
        let stack = StackSnapshot::capture(self.max_depth(), ENTRY_FRAMES);
        TracedError::from_parts(underlying, String::new(), stack)
    }

    /// Wrap an error with an annotation; `None` stays `None`
    #[inline(never)]
    #[must_use]
    pub fn wrap<E, S: Into<String>>(
        &self,
        underlying: Option<E>,
        message: S,
    ) -> Option<TracedError<E>> {
        let underlying = underlying?;
        let message = message.into();
        let stack = StackSnapshot::capture(self.max_depth(), ENTRY_FRAMES);
        Some(TracedError::from_parts(underlying, message, stack))
    }

    /// Wrap an error with a formatted annotation; `None` stays `None`
    ///
    /// The arguments are only formatted when there is an error to wrap.
    #[inline(never)]
    #[must_use]
    pub fn wrap_formatted<E>(
        &self,
        underlying: Option<E>,
        args: fmt::Arguments<'_>,
    ) -> Option<TracedError<E>> {
        let underlying = underlying?;
        let message = format_message(args);
        let stack = StackSnapshot::capture(self.max_depth(), ENTRY_FRAMES);
        Some(TracedError::from_parts(underlying, message, stack))
    }
}

/// Wrap an error using the default tracer; `None` stays `None`
#[inline(never)]
#[must_use]
pub fn new<E>(underlying: Option<E>) -> Option<TracedError<E>> {
    let underlying = underlying?;
    let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
    Some(TracedError::from_parts(underlying, String::new(), stack))
}

/// Build a [`Message`] error from format arguments using the default tracer
///
/// Always returns an error, see also [`newf!`](crate::newf).
#[inline(never)]
#[must_use]
pub fn new_formatted(args: fmt::Arguments<'_>) -> TracedError<Message> {
    let underlying = Message(format_message(args));
    let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
    TracedError::from_parts(underlying, String::new(), stack)
}

/// Wrap an error with an annotation using the default tracer
#[inline(never)]
#[must_use]
pub fn wrap<E, S: Into<String>>(underlying: Option<E>, message: S) -> Option<TracedError<E>> {
    let underlying = underlying?;
    let message = message.into();
    let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
    Some(TracedError::from_parts(underlying, message, stack))
}

/// Wrap an error with a formatted annotation using the default tracer
///
/// `None` stays `None` and the arguments are not formatted. See also
/// [`wrapf!`](crate::wrapf).
#[inline(never)]
#[must_use]
pub fn wrap_formatted<E>(
    underlying: Option<E>,
    args: fmt::Arguments<'_>,
) -> Option<TracedError<E>> {
    let underlying = underlying?;
    let message = format_message(args);
    let stack = StackSnapshot::capture(Tracer::global().max_depth(), ENTRY_FRAMES);
    Some(TracedError::from_parts(underlying, message, stack))
}
