//! Symbol resolution and text rendering

use super::{Frame, StackSnapshot, UNKNOWN};
use std::fmt::Write as _;

impl StackSnapshot {
    /// Resolved frames, innermost first
    ///
    /// Resolution runs once; later calls return the cached frames.
    pub fn frames(&self) -> &[Frame] {
        self.resolved.get_or_init(|| self.resolve())
    }

    /// Resolve every captured location without touching the cache
    ///
    /// Each location yields exactly one [`Frame`]. When debug information
    /// reports several inlined functions for one location, the innermost is
    /// used. Missing parts fall back to placeholders.
    #[must_use]
    pub fn resolve(&self) -> Vec<Frame> {
        self.frames.iter().map(resolve_one).collect()
    }

    /// Render the snapshot as `"<function>\n\t<file>:<line>\n"` per frame
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for frame in self.frames() {
            // Writing into a String cannot fail
            let _ = write!(out, "{frame}");
        }
        out
    }
}

fn resolve_one(raw: &backtrace::Frame) -> Frame {
    let mut resolved: Option<Frame> = None;

    backtrace::resolve_frame(raw, |symbol| {
        if resolved.is_some() {
            return;
        }
        resolved = Some(Frame {
            function: symbol
                .name()
                .map_or_else(|| UNKNOWN.to_string(), |name| format!("{name:#}")),
            file: symbol
                .filename()
                .map_or_else(|| UNKNOWN.to_string(), |path| path.display().to_string()),
            line: symbol.lineno().unwrap_or(0),
        });
    });

    resolved.unwrap_or_else(|| {
        tracing::trace!(ip = ?raw.ip(), "unresolved stack frame");
        Frame::unknown()
    })
}
