//! Text span and location types for source tracking.
//!
//! Tokens and diagnostics carry a [`SourceLocation`]: the byte span of the
//! offending text plus the line and column where it starts and ends.

use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }

    /// Return a new span covering both this span and the other.
    pub fn union(&self, other: &TextSpan) -> TextSpan {
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        TextSpan::from_bounds(start, end)
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// Line and column of a character position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct LineAndColumn {
    /// 0-based line number.
    pub line: u32,
    /// 0-based column, counted in characters.
    pub column: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineAndColumn {
    /// Rendered 1-based, the way editors number lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Where a token or diagnostic came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SourceLocation {
    pub span: TextSpan,
    pub start: LineAndColumn,
    /// Position just past the last character of the span.
    pub end: LineAndColumn,
}

impl SourceLocation {
    pub fn new(span: TextSpan, start: LineAndColumn, end: LineAndColumn) -> Self {
        Self { span, start, end }
    }

    /// A zero-width location at `start`.
    pub fn point(offset: TextPos, at: LineAndColumn) -> Self {
        Self {
            span: TextSpan::new(offset, 0),
            start: at,
            end: at,
        }
    }

    /// A location running from the start of `self` to the end of `other`.
    pub fn to(&self, other: &SourceLocation) -> SourceLocation {
        SourceLocation {
            span: self.span.union(&other.span),
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
        assert_eq!(span.to_range(), 5..15);
    }

    #[test]
    fn test_text_span_union() {
        let a = TextSpan::from_bounds(2, 4);
        let b = TextSpan::from_bounds(8, 9);
        assert_eq!(a.union(&b), TextSpan::from_bounds(2, 9));
    }

    #[test]
    fn test_location_display_is_one_based() {
        let loc = SourceLocation::point(0, LineAndColumn::new(0, 0));
        assert_eq!(loc.to_string(), "1:1");
        let loc = SourceLocation::point(12, LineAndColumn::new(2, 4));
        assert_eq!(loc.to_string(), "3:5");
    }

    #[test]
    fn test_location_to() {
        let a = SourceLocation::new(
            TextSpan::new(0, 3),
            LineAndColumn::new(0, 0),
            LineAndColumn::new(0, 3),
        );
        let b = SourceLocation::new(
            TextSpan::new(10, 2),
            LineAndColumn::new(1, 2),
            LineAndColumn::new(1, 4),
        );
        let joined = a.to(&b);
        assert_eq!(joined.span, TextSpan::from_bounds(0, 12));
        assert_eq!(joined.start, LineAndColumn::new(0, 0));
        assert_eq!(joined.end, LineAndColumn::new(1, 4));
    }
}
