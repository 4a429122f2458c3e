//! A character cursor over source text that tracks line and column.

use crate::char_codes::*;
use retype_core::text::{LineAndColumn, SourceLocation, TextSpan};

/// A saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub offset: usize,
    pub at: LineAndColumn,
}

pub struct Cursor<'s> {
    text: &'s str,
    /// Byte offset of the current character.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'s> Cursor<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            text,
            pos: 0,
            line: 0,
            column: 0,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed text.
    #[inline]
    pub fn rest(&self) -> &'s str {
        &self.text[self.pos..]
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `n` positions ahead of the current one.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume one character. CRLF counts as a single line terminator.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += ch.len_utf8();
        match ch {
            CARRIAGE_RETURN if self.current() == Some(LINE_FEED) => {}
            c if is_line_break(c) => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
        Some(ch)
    }

    /// Consume `n` characters.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume characters while `pred` holds.
    pub fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.current() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Consume characters up to the byte offset `target`.
    pub fn advance_to(&mut self, target: usize) {
        while self.pos < target && self.advance().is_some() {}
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.pos,
            at: LineAndColumn::new(self.line, self.column),
        }
    }

    /// The text consumed since `start`.
    #[inline]
    pub fn slice_from(&self, start: Mark) -> &'s str {
        &self.text[start.offset..self.pos]
    }

    /// The location of the text consumed since `start`.
    pub fn location_from(&self, start: Mark) -> SourceLocation {
        SourceLocation::new(
            TextSpan::from_bounds(start.offset as u32, self.pos as u32),
            start.at,
            LineAndColumn::new(self.line, self.column),
        )
    }
}
