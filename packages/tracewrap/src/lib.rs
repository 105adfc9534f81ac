//! Error wrapping with stack traces
//!
//! `tracewrap` wraps any error together with an optional annotation and the
//! call stack captured where the wrap happened. Diagnostic code can then
//! print the annotation chain with [`TracedError::describe`] and the
//! originating stack with [`TracedError::trace_text`].
//!
//! - Wrapping "no error" yields "no error": the `Option`-taking constructors
//!   return `None` for `None`, and [`ResultExt`] leaves `Ok` untouched
//! - The wrapped error stays reachable through [`TracedError::inner`] and
//!   `source()`, so [`is`] can find a sentinel anywhere in a chain
//! - Capture depth comes from a [`Tracer`]; the default tracer can be
//!   configured once with [`configure_max_depth`]
//!
//! ```
//! use tracewrap::{ResultExt, TracedError};
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("disk full")]
//! struct DiskFull;
//!
//! fn save() -> Result<(), DiskFull> {
//!     Err(DiskFull)
//! }
//!
//! let err: TracedError<DiskFull> = save().wrap_err("saving profile").unwrap_err();
//! assert_eq!(err.describe(), "saving profile: disk full");
//! assert!(err.is(&DiskFull));
//! assert!(!err.trace_text().is_empty());
//! ```

pub mod config;
pub mod logging;
pub mod stack;
pub mod traced;

pub use config::{
    configure, configure_max_depth, ConfigError, TraceConfig, Tracer, DEFAULT_MAX_DEPTH,
};
pub use stack::{Frame, StackSnapshot};
pub use traced::{
    chain, is, new, new_formatted, wrap, wrap_formatted, Chain, Message, ResultExt, TracedError,
    TracedOptionExt,
};
