//! Bounded stack capture

use super::{Frame, StackSnapshot};
use once_cell::sync::OnceCell;

/// Frames kept while searching for the capture marker
///
/// Only used when the unwinder cannot report function start addresses and
/// the marker frame is never recognised.
const FALLBACK_WINDOW: usize = 64;

impl StackSnapshot {
    /// Capture up to `max_depth` caller locations
    ///
    /// Frames belonging to the unwinder and to this function are always
    /// dropped. `skip` additional frames are dropped after that, so each
    /// constructor passes the number of wrapper frames sitting between this
    /// function and user code. Every such frame must be `#[inline(never)]`.
    #[inline(never)]
    #[must_use]
    pub(crate) fn capture(max_depth: usize, skip: usize) -> Self {
        let marker = Self::capture as *const () as usize;
        let mut found_marker = false;
        let mut skipped = 0;
        let mut prelude: Vec<backtrace::Frame> = Vec::new();
        // Grows with the real stack; `max_depth` is only an upper bound
        let mut frames: Vec<backtrace::Frame> =
            Vec::with_capacity(max_depth.min(FALLBACK_WINDOW));

        backtrace::trace(|frame| {
            if !found_marker {
                if frame.symbol_address() as usize == marker {
                    found_marker = true;
                } else if prelude.len() < FALLBACK_WINDOW {
                    prelude.push(frame.clone());
                }
                return true;
            }
            if skipped < skip {
                skipped += 1;
                return true;
            }
            frames.push(frame.clone());
            frames.len() < max_depth
        });

        if !found_marker {
            // Unwinder gave no function addresses; keep what was seen
            tracing::trace!(seen = prelude.len(), "capture marker not found");
            frames = prelude;
            frames.truncate(max_depth);
        }

        tracing::trace!(frames = frames.len(), skip, max_depth, "captured stack snapshot");

        Self {
            frames,
            resolved: OnceCell::new(),
        }
    }

    /// Snapshot holding already resolved frames
    ///
    /// Used where no live stack exists, e.g. to render a trace that was
    /// produced elsewhere.
    #[must_use]
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self {
            frames: Vec::new(),
            resolved: OnceCell::with_value(frames),
        }
    }
}
