//! # Line Cycling
//!
//! Rewrites the list prefix of a single line to the next (or previous) style
//! in the ring. The caller hands over a snapshot of the line, the line
//! above it and the cursor column, and gets back the replacement line and
//! the shifted cursor column. Nothing here touches a buffer.

use std::borrow::Cow;

use crate::indent::same_indentation;
use crate::style::{Direction, Line};

/// Everything the engine needs to cycle one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleContext<'a> {
    pub line: &'a str,
    /// The line directly above, `None` on the first line of a buffer.
    pub line_above: Option<&'a str>,
    /// Cursor column on `line`.
    pub cursor: isize,
    pub direction: Direction,
}

/// Replacement text for the line and where the cursor should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    pub content: String,
    /// Shifted by the change in line length. Not clamped: a cursor that sat
    /// inside a removed prefix can end up before the content or negative.
    /// Saturates at the ends of `isize`.
    pub cursor: isize,
}

/// Cycles the list style of `ctx.line` one step in `ctx.direction`.
///
/// When the step lands on Ordered and `auto_increment` is set, the number
/// continues from an ordered line directly above with the same (tab
/// normalized) indentation. Otherwise numbering starts at 1.
pub fn cycle_line(ctx: &CycleContext<'_>, auto_increment: bool) -> CycleOutcome {
    let line = Line::split(ctx.line);
    let marker = line.marker();
    let target = marker.style.next(ctx.direction);

    let new_prefix: Cow<'static, str> = match target.literal() {
        Some(literal) => Cow::Borrowed(literal),
        None => {
            let number = if auto_increment {
                continued_ordinal(&line, ctx.line_above)
            } else {
                None
            };
            Cow::Owned(format!("{}. ", number.as_deref().unwrap_or("1")))
        }
    };

    let rest = &line.content[marker.len()..];
    let content = format!("{}{}{}", line.indentation, new_prefix, rest);

    // Both prefixes are ASCII, so the byte difference equals the column
    // difference whatever unit the host counts columns in.
    let delta = new_prefix.len() as isize - marker.len() as isize;

    log::debug!(
        "cycle {:?}: {:?} -> {:?}, prefix {:?} -> {:?}",
        ctx.direction,
        marker.style,
        target,
        marker.prefix,
        new_prefix
    );

    CycleOutcome {
        content,
        cursor: ctx.cursor.saturating_add(delta),
    }
}

/// The number following an ordered line above at the same indentation.
fn continued_ordinal(line: &Line<'_>, line_above: Option<&str>) -> Option<String> {
    let above = Line::split(line_above?);
    if !same_indentation(above.indentation, line.indentation) {
        log::trace!("line above is indented differently, numbering restarts");
        return None;
    }
    above.marker().ordinal().map(increment_decimal)
}

/// Adds one to a run of ASCII digits without going through a fixed-width
/// integer. Leading zeros are dropped: `"007"` becomes `"8"`.
fn increment_decimal(digits: &str) -> String {
    let mut digits: Vec<char> = digits.trim_start_matches('0').chars().collect();
    for d in digits.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = char::from(*d as u8 + 1);
            return digits.into_iter().collect();
        }
    }
    digits.insert(0, '1');
    digits.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn forward(line: &str, line_above: Option<&str>) -> String {
        let ctx = CycleContext {
            line,
            line_above,
            cursor: 0,
            direction: Direction::Forward,
        };
        cycle_line(&ctx, true).content
    }

    fn backward(line: &str) -> String {
        let ctx = CycleContext {
            line,
            line_above: None,
            cursor: 0,
            direction: Direction::Backward,
        };
        cycle_line(&ctx, true).content
    }

    #[rstest]
    #[case("dog", "- dog")]
    #[case("- dog", "- [ ] dog")]
    #[case("- [ ] dog", "- [x] dog")]
    #[case("- [x] dog", "1. dog")]
    #[case("1. dog", "dog")]
    #[case("42. dog", "dog")]
    #[case("", "- ")]
    #[case("   ", "   - ")]
    #[case("\t- [ ] dog", "\t- [x] dog")]
    #[case("- [X] dog", "- [ ] [X] dog")]
    #[case("\u{feff}- dog", "\u{feff}- [ ] dog")]
    fn forward_steps(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(forward(line, None), expected);
    }

    #[rstest]
    #[case("dog", "1. dog")]
    #[case("1. dog", "- [x] dog")]
    #[case("- [x] dog", "- [ ] dog")]
    #[case("- [ ] dog", "- dog")]
    #[case("- dog", "dog")]
    fn backward_steps(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(backward(line), expected);
    }

    #[rstest]
    #[case("1. dog", "- [x] cat", "2. cat")]
    #[case("9. dog", "- [x] cat", "10. cat")]
    #[case("  15. dog", "  - [x] cat", "  16. cat")]
    #[case("\t3. dog", "    - [x] cat", "    4. cat")]
    #[case("1. dog", " - [x] cat", " 1. cat")]
    #[case("- dog", "- [x] cat", "1. cat")]
    #[case("", "- [x] cat", "1. cat")]
    #[case("   ", "   - [x] cat", "   1. cat")]
    #[case("1.dog", "- [x] cat", "1. cat")]
    fn auto_increment_from_line_above(
        #[case] above: &str,
        #[case] line: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(forward(line, Some(above)), expected);
    }

    #[test]
    fn auto_increment_disabled_always_starts_at_one() {
        let ctx = CycleContext {
            line: "- [x] cat",
            line_above: Some("7. dog"),
            cursor: 0,
            direction: Direction::Forward,
        };
        assert_eq!(cycle_line(&ctx, false).content, "1. cat");
    }

    #[test]
    fn backward_into_ordered_also_increments() {
        let ctx = CycleContext {
            line: "cat",
            line_above: Some("4. dog"),
            cursor: 0,
            direction: Direction::Backward,
        };
        assert_eq!(cycle_line(&ctx, true).content, "5. cat");
    }

    #[test]
    fn leaving_ordered_ignores_line_above() {
        assert_eq!(forward("3. cat", Some("2. dog")), "cat");
    }

    #[rstest]
    #[case("dog", 3, 5)]
    #[case("- dog", 5, 9)]
    #[case("- [x] dog", 9, 6)]
    #[case("123. dog", 8, 3)]
    #[case("123. dog", 1, -4)]
    #[case("  dog", 0, 2)]
    fn cursor_shifts_by_length_change(#[case] line: &str, #[case] cursor: isize, #[case] expected: isize) {
        let ctx = CycleContext {
            line,
            line_above: None,
            cursor,
            direction: Direction::Forward,
        };
        assert_eq!(cycle_line(&ctx, true).cursor, expected);
    }

    #[rstest]
    #[case("dog", isize::MAX, Direction::Forward, isize::MAX)]
    #[case("- dog", isize::MIN, Direction::Backward, isize::MIN)]
    #[case("- [x] dog", isize::MIN + 1, Direction::Forward, isize::MIN)]
    fn cursor_shift_saturates(
        #[case] line: &str,
        #[case] cursor: isize,
        #[case] direction: Direction,
        #[case] expected: isize,
    ) {
        let ctx = CycleContext {
            line,
            line_above: None,
            cursor,
            direction,
        };
        assert_eq!(cycle_line(&ctx, true).cursor, expected);
    }

    #[test]
    fn cursor_shift_counts_columns_not_bytes() {
        let ctx = CycleContext {
            line: "- [x] über",
            line_above: None,
            cursor: 10,
            direction: Direction::Forward,
        };
        let outcome = cycle_line(&ctx, true);
        assert_eq!(outcome.content, "1. über");
        assert_eq!(outcome.cursor, 7);
        assert_eq!(
            outcome.content.chars().count() as isize - ctx.line.chars().count() as isize,
            outcome.cursor - ctx.cursor
        );
    }

    #[rstest]
    #[case("0", "1")]
    #[case("1", "2")]
    #[case("9", "10")]
    #[case("199", "200")]
    #[case("007", "8")]
    #[case("000", "1")]
    #[case("18446744073709551615", "18446744073709551616")]
    fn increments_digit_runs(#[case] digits: &str, #[case] expected: &str) {
        assert_eq!(increment_decimal(digits), expected);
    }
}
