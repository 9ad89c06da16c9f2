use crate::cycle::{CycleContext, CycleOutcome, cycle_line};
use crate::style::Direction;

use super::{Cursor, Editor};

/// User-facing commands a host registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CycleForwards,
    CycleBackwards,
}

impl Command {
    /// Stable identifier for keymaps and command palettes.
    pub fn id(self) -> &'static str {
        match self {
            Command::CycleForwards => "cycle-line-forwards",
            Command::CycleBackwards => "cycle-line-backwards",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::CycleForwards => "Cycle line forwards",
            Command::CycleBackwards => "Cycle line backwards",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Command::CycleForwards => Direction::Forward,
            Command::CycleBackwards => Direction::Backward,
        }
    }
}

/// Cycles the line under the cursor and writes the result back.
///
/// The line above is the previous line of the buffer, none on line 0.
/// Returns `None` without touching the buffer when the cursor line does not
/// exist.
pub fn run_command<E: Editor + ?Sized>(
    editor: &mut E,
    command: Command,
    auto_increment: bool,
) -> Option<CycleOutcome> {
    let Cursor { line: line_number, ch } = editor.cursor();

    let outcome = {
        let line = editor.line(line_number)?;
        let line_above = match line_number.checked_sub(1) {
            Some(above) => editor.line(above),
            None => None,
        };
        let ctx = CycleContext {
            line: &line,
            line_above: line_above.as_deref(),
            cursor: ch,
            direction: command.direction(),
        };
        cycle_line(&ctx, auto_increment)
    };

    log::debug!("{}: line {line_number} -> {:?}", command.id(), outcome.content);

    editor.set_line(line_number, &outcome.content);
    editor.set_cursor(Cursor {
        line: line_number,
        ch: outcome.cursor,
    });
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::LineBuffer;
    use pretty_assertions::assert_eq;

    #[test]
    fn commands_map_to_directions() {
        assert_eq!(Command::CycleForwards.id(), "cycle-line-forwards");
        assert_eq!(Command::CycleBackwards.id(), "cycle-line-backwards");
        assert_eq!(Command::CycleForwards.direction(), Direction::Forward);
        assert_eq!(Command::CycleBackwards.direction(), Direction::Backward);
    }

    #[test]
    fn first_line_has_no_line_above() {
        let mut buffer = LineBuffer::from_text("- [x] dog\n");
        let outcome = run_command(&mut buffer, Command::CycleForwards, true);
        assert_eq!(outcome.map(|o| o.content).as_deref(), Some("1. dog"));
        assert_eq!(buffer.text(), "1. dog\n");
    }

    #[test]
    fn numbers_continue_from_previous_line() {
        let mut buffer = LineBuffer::from_text("1. a\n2. b\n- [x] c");
        buffer.set_cursor(Cursor { line: 2, ch: 0 });
        run_command(&mut buffer, Command::CycleForwards, true);
        assert_eq!(buffer.text(), "1. a\n2. b\n3. c");
    }

    #[test]
    fn cursor_moves_with_the_text() {
        let mut buffer = LineBuffer::from_text("dog");
        buffer.set_cursor(Cursor { line: 0, ch: 2 });
        run_command(&mut buffer, Command::CycleForwards, true);
        assert_eq!(buffer.cursor(), Cursor { line: 0, ch: 4 });
        run_command(&mut buffer, Command::CycleBackwards, true);
        assert_eq!(buffer.cursor(), Cursor { line: 0, ch: 2 });
    }

    #[test]
    fn negative_engine_offset_is_clipped_by_the_buffer() {
        let mut buffer = LineBuffer::from_text("- [ ] dog");
        buffer.set_cursor(Cursor { line: 0, ch: 1 });
        let outcome = run_command(&mut buffer, Command::CycleBackwards, true);
        assert_eq!(outcome.map(|o| o.cursor), Some(-3));
        assert_eq!(buffer.text(), "- dog");
        assert_eq!(buffer.cursor(), Cursor { line: 0, ch: 0 });
    }

    #[test]
    fn backwards_from_plain_enters_ordered() {
        let mut buffer = LineBuffer::from_text("\t4. a\n\tb");
        buffer.set_cursor(Cursor { line: 1, ch: 0 });
        run_command(&mut buffer, Command::CycleBackwards, true);
        assert_eq!(buffer.text(), "\t4. a\n\t5. b");
    }
}
