//! Traced errors
//!
//! Provides the error wrapper and everything built around it:
//! - Construction with and without annotations, capturing the caller's stack
//! - `Display` rendering of the annotation chain and text rendering of the stack
//! - Chain traversal over `source()` for sentinel checks
//! - Extension traits for `Result` and `Option`

pub mod chain;
pub mod constructors;
pub mod display;
pub mod extensions;
pub mod macros;
pub mod types;

pub use chain::{chain, is, Chain};
pub use constructors::{new, new_formatted, wrap, wrap_formatted};
pub use extensions::{ResultExt, TracedOptionExt};
pub use types::{Message, TracedError};
