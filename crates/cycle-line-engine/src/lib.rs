//! Cycles the list style of a single Markdown line.
//!
//! ```text
//! dog -> - dog -> - [ ] dog -> - [x] dog -> 1. dog -> dog
//! ```
//!
//! [`cycle::cycle_line`] is the whole algorithm: it takes the line, the line
//! above and the cursor column and returns the rewritten line and the new
//! column. [`editor`] wires it to a line-addressed buffer.

pub mod cycle;
pub mod editor;
pub mod indent;
pub mod style;

// Re-export key types for easier usage
pub use cycle::{CycleContext, CycleOutcome, cycle_line};
pub use editor::{Command, Cursor, Editor, LineBuffer, run_command};
pub use indent::normalize;
pub use style::{Direction, Line, ListMarker, ListStyle};
