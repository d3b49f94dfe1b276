//! Character-level cursor over a type-name string.
//!
//! This module provides the [`Cursor`] type, a position-tracking view over the input text
//! used by the grammar parser in [`crate::parser`]. It offers unbounded lookahead via
//! [`Cursor::peek_at`] and single-character consumption via [`Cursor::read`].
//!
//! End of input is always represented as [`None`], never as an error: the grammar decides
//! at each position whether running out of characters is acceptable. The cursor itself has
//! no side effects beyond position advancement and is never exposed outside the crate.
//!
//! Positions are counted in characters, not bytes, so the positions reported in
//! [`crate::Error::Grammar`] line up with what a caller sees when iterating the
//! input with [`str::chars`].

use crate::Error;

/// A position-tracking character cursor over type-name text.
///
/// The cursor maintains a current position within the decoded character sequence and
/// provides non-consuming lookahead at arbitrary offsets. It also retains the original
/// input string so that grammar errors can carry the complete text they were produced
/// from (see [`Cursor::grammar_error`]).
pub(crate) struct Cursor<'a> {
    /// The original input text, kept for error reporting
    input: &'a str,
    /// The input decoded to characters for O(1) positional access
    chars: Vec<char>,
    /// Current position within `chars`
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new [`Cursor`] over the given input text, positioned at the start.
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Returns the character at the current position without consuming it.
    ///
    /// Returns `None` at end of input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the character `offset` positions ahead of the current one without consuming
    /// anything. `peek_at(0)` is equivalent to [`Cursor::peek`].
    ///
    /// Returns `None` when the offset runs past the end of input.
    pub(crate) fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Consumes and returns the character at the current position.
    ///
    /// Returns `None` at end of input, in which case the position is unchanged.
    pub(crate) fn read(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    /// Returns `true` if there are unconsumed characters remaining.
    pub(crate) fn has_more(&self) -> bool {
        self.position < self.chars.len()
    }

    /// Get the current position of the cursor, in characters from the start of the input.
    pub(crate) fn pos(&self) -> usize {
        self.position
    }

    /// Build a [`Error::Grammar`] describing a violation at the current position.
    ///
    /// The error captures the full original input, the character at the current position
    /// (or `None` at end of input) and the position itself; `expected` describes what the
    /// grammar required instead.
    pub(crate) fn grammar_error(&self, expected: &'static str) -> Error {
        Error::Grammar {
            input: self.input.to_string(),
            found: self.peek(),
            position: self.position,
            expected,
        }
    }
}
