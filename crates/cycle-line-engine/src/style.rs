//! # List Styles
//!
//! The fixed ring of line prefixes the engine cycles through, and the
//! recognizers that tell which one a line currently carries.
//!
//! ```text
//! Plain -> "- " -> "- [ ] " -> "- [x] " -> "1. " -> Plain
//! ```
//!
//! Unordered and both checklist styles share the `"- "` lead, so a match on
//! Unordered is always refined: the longer checklist literal wins when it
//! matches.

use regex::Regex;
use std::sync::OnceLock;

/// Direction to move through the style ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// One of the recognized line-prefix categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStyle {
    /// No list prefix.
    Plain,
    /// `- `
    Unordered,
    /// `- [ ] `
    Checklist,
    /// `- [x] `
    ChecklistDone,
    /// Digits followed by `. `, e.g. `1. ` or `15. `
    Ordered,
}

impl ListStyle {
    /// The canonical ring, in forward order.
    pub const CYCLE: [ListStyle; 5] = [
        ListStyle::Plain,
        ListStyle::Unordered,
        ListStyle::Checklist,
        ListStyle::ChecklistDone,
        ListStyle::Ordered,
    ];

    pub const UNORDERED_PREFIX: &'static str = "- ";
    pub const CHECKLIST_PREFIX: &'static str = "- [ ] ";
    pub const CHECKLIST_DONE_PREFIX: &'static str = "- [x] ";

    /// Fixed prefix text for literal styles. `None` for Ordered, whose
    /// prefix depends on the number.
    pub fn literal(self) -> Option<&'static str> {
        match self {
            ListStyle::Plain => Some(""),
            ListStyle::Unordered => Some(Self::UNORDERED_PREFIX),
            ListStyle::Checklist => Some(Self::CHECKLIST_PREFIX),
            ListStyle::ChecklistDone => Some(Self::CHECKLIST_DONE_PREFIX),
            ListStyle::Ordered => None,
        }
    }

    fn position(self) -> usize {
        match self {
            ListStyle::Plain => 0,
            ListStyle::Unordered => 1,
            ListStyle::Checklist => 2,
            ListStyle::ChecklistDone => 3,
            ListStyle::Ordered => 4,
        }
    }

    /// The neighbouring style in the ring, wrapping at either end.
    pub fn next(self, direction: Direction) -> Self {
        let len = Self::CYCLE.len();
        let index = match direction {
            Direction::Forward => (self.position() + 1) % len,
            Direction::Backward => (self.position() + len - 1) % len,
        };
        Self::CYCLE[index]
    }
}

fn ordered_prefix_regex() -> &'static Regex {
    static ORDERED_PREFIX: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digits.
    ORDERED_PREFIX.get_or_init(|| Regex::new(r"^[0-9]+\. ").expect("Invalid ordered prefix regex"))
}

/// The list prefix found at the start of a line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    pub style: ListStyle,
    /// The exact prefix text matched, empty for Plain.
    pub prefix: &'a str,
}

impl<'a> ListMarker<'a> {
    /// Classifies `content` (a line with its indentation already removed).
    ///
    /// Styles are tried in canonical order. A `"- "` match is refined to a
    /// checklist style when the longer literal also matches.
    pub fn classify(content: &'a str) -> Self {
        if content.starts_with(ListStyle::UNORDERED_PREFIX) {
            let style = [ListStyle::Checklist, ListStyle::ChecklistDone]
                .into_iter()
                .find(|style| style.literal().is_some_and(|lit| content.starts_with(lit)))
                .unwrap_or(ListStyle::Unordered);
            let len = style.literal().map_or(0, str::len);
            return Self {
                style,
                prefix: &content[..len],
            };
        }

        if let Some(m) = ordered_prefix_regex().find(content) {
            return Self {
                style: ListStyle::Ordered,
                prefix: m.as_str(),
            };
        }

        Self {
            style: ListStyle::Plain,
            prefix: "",
        }
    }

    /// Byte length of the matched prefix.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// The digit run of an Ordered prefix (`"15"` for `"15. "`).
    pub fn ordinal(&self) -> Option<&'a str> {
        match self.style {
            ListStyle::Ordered => self.prefix.strip_suffix(". "),
            _ => None,
        }
    }
}

/// Whitespace as editors running on JavaScript see it: Unicode `White_Space`
/// plus the byte order mark, minus NEL.
pub fn is_indent_char(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// A line split into its leading whitespace and the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Leading whitespace, tabs and spaces kept verbatim.
    pub indentation: &'a str,
    pub content: &'a str,
}

impl<'a> Line<'a> {
    /// Splits at the first non-whitespace character. A blank line is all
    /// indentation with empty content.
    pub fn split(text: &'a str) -> Self {
        let at = text
            .char_indices()
            .find(|&(_, c)| !is_indent_char(c))
            .map_or(text.len(), |(i, _)| i);
        let (indentation, content) = text.split_at(at);
        Self {
            indentation,
            content,
        }
    }

    pub fn marker(&self) -> ListMarker<'a> {
        ListMarker::classify(self.content)
    }
}
