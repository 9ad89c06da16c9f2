/*!
 * # Editor Integration
 *
 * The engine in [`crate::cycle`] works on a snapshot of two lines and never
 * sees a buffer. This module is the seam between it and whatever hosts the
 * text:
 *
 * - **`Editor`**: the handful of buffer operations a cycle needs (read a
 *   line, write a line, read and move the cursor)
 * - **`buffer`**: `LineBuffer`, an xi-rope backed `Editor` used by the
 *   terminal host and the tests
 * - **`commands`**: the user-facing `Command`s and `run_command`, which
 *   reads the cursor line, cycles it, and writes the result back
 *
 * ## Usage Pattern
 *
 * ```rust
 * use cycle_line_engine::editor::{Command, Cursor, Editor, LineBuffer, run_command};
 *
 * let mut buffer = LineBuffer::from_text("1. dog\n- [x] cat\n");
 * buffer.set_cursor(Cursor { line: 1, ch: 9 });
 *
 * run_command(&mut buffer, Command::CycleForwards, true);
 *
 * assert_eq!(buffer.text(), "1. dog\n2. cat\n");
 * assert_eq!(buffer.cursor(), Cursor { line: 1, ch: 6 });
 * ```
 */

use std::borrow::Cow;

pub mod buffer;
pub mod commands;

pub use buffer::LineBuffer;
pub use commands::{Command, run_command};

/// A cursor position as a line index and a column.
///
/// The column is signed so the engine's unclamped offset can be passed
/// through as-is; hosts decide how to clip it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub line: usize,
    pub ch: isize,
}

/// Buffer access the cycle commands rely on.
pub trait Editor {
    fn line_count(&self) -> usize;

    /// Text of line `n` without its line ending, `None` past the end.
    fn line(&self, n: usize) -> Option<Cow<'_, str>>;

    /// Replaces the text of line `n`, keeping its line ending.
    fn set_line(&mut self, n: usize, text: &str);

    fn cursor(&self) -> Cursor;

    fn set_cursor(&mut self, cursor: Cursor);
}
