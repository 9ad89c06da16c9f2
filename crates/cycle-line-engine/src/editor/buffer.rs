use std::borrow::Cow;
use std::ops::Range;

use xi_rope::Rope;
use xi_rope::delta::Builder;

use super::{Cursor, Editor};

/// In-memory text buffer addressed by line, backed by an xi-rope.
///
/// Saving writes the rope back verbatim, so line endings (`\n` or `\r\n`)
/// and a missing or present final newline survive a round trip. A buffer
/// ending in a newline has one more, empty, line after it, the way text
/// editors show it.
#[derive(Clone)]
pub struct LineBuffer {
    buffer: Rope,
    cursor: Cursor,
    version: u64,
}

impl LineBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            cursor: Cursor::default(),
            version: 0,
        }
    }

    /// The full buffer contents.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Incremented on every `set_line`.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of characters on line `n`, 0 past the end.
    pub fn line_width(&self, n: usize) -> usize {
        self.line(n).map_or(0, |line| line.chars().count())
    }

    /// Byte range of line `n`, excluding its line ending.
    fn line_span(&self, n: usize) -> Option<Range<usize>> {
        let mut start = 0usize;
        let mut count = 0usize;
        for raw in self.buffer.lines_raw(..) {
            let raw: &str = &raw;
            let end = start + raw.len();
            if count == n {
                let body = raw.strip_suffix('\n').unwrap_or(raw);
                let body = body.strip_suffix('\r').unwrap_or(body);
                return Some(start..start + body.len());
            }
            start = end;
            count += 1;
        }
        // The empty line after a trailing newline, or the only line of an
        // empty buffer.
        (n == count && n + 1 == self.line_count()).then_some(start..start)
    }

    fn clamp(&self, cursor: Cursor) -> Cursor {
        let line = cursor.line.min(self.line_count().saturating_sub(1));
        let width = self.line_width(line) as isize;
        Cursor {
            line,
            ch: cursor.ch.clamp(0, width),
        }
    }
}

impl Editor for LineBuffer {
    fn line_count(&self) -> usize {
        self.buffer
            .lines_raw(..)
            .filter(|raw| raw.ends_with('\n'))
            .count()
            + 1
    }

    fn line(&self, n: usize) -> Option<Cow<'_, str>> {
        let span = self.line_span(n)?;
        Some(self.buffer.slice_to_cow(span))
    }

    fn set_line(&mut self, n: usize, text: &str) {
        let Some(span) = self.line_span(n) else {
            log::warn!("set_line: line {n} is past the end of the buffer");
            return;
        };
        let mut builder = Builder::new(self.buffer.len());
        builder.replace(span, Rope::from(text));
        self.buffer = builder.build().apply(&self.buffer);
        self.version += 1;
    }

    fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Clips the position into the buffer, like an editor host would.
    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = self.clamp(cursor);
    }
}
