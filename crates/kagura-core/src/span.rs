//! Source span and position types for locating matched code.

use serde::{Deserialize, Serialize};

/// A line and column position within a source file.
///
/// Both fields are one-based, following the convention used in match
/// output (editors and diagnostics count from line 1).
///
/// # Example
///
/// ```
/// use kagura_core::LineCol;
///
/// let pos = LineCol::new(3, 7);
/// assert_eq!(pos.line(), 3);
/// assert_eq!(pos.column(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCol {
    /// One-based line number.
    pub line: u32,
    /// One-based column number (byte offset within the line).
    pub column: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the one-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the one-based column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// A contiguous byte range in a UTF-8 source, with line/column equivalents.
///
/// The byte range is half-open: `start_byte` is inclusive and `end_byte` is
/// exclusive.  Containment and adjacency tests operate purely on the byte
/// offsets; the line/column positions exist for display.
///
/// # Example
///
/// ```
/// use kagura_core::{LineCol, Span};
///
/// let outer = Span::new(0, 40, LineCol::new(1, 1), LineCol::new(4, 1));
/// let inner = Span::new(10, 20, LineCol::new(2, 1), LineCol::new(2, 11));
/// assert!(inner.is_inside(&outer));
/// assert!(outer.contains(&inner));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start_byte: u32,
    /// End byte offset (exclusive).
    pub end_byte: u32,
    /// Start position as line and column.
    pub start: LineCol,
    /// End position as line and column.
    pub end: LineCol,
}

impl Span {
    /// Creates a new span from byte offsets and line/column positions.
    #[must_use]
    pub const fn new(start_byte: u32, end_byte: u32, start: LineCol, end: LineCol) -> Self {
        Self {
            start_byte,
            end_byte,
            start,
            end,
        }
    }

    /// Returns the inclusive start byte offset.
    #[must_use]
    pub const fn start_byte(&self) -> u32 {
        self.start_byte
    }

    /// Returns the exclusive end byte offset.
    #[must_use]
    pub const fn end_byte(&self) -> u32 {
        self.end_byte
    }

    /// Returns the start line/column position.
    #[must_use]
    pub const fn start(&self) -> LineCol {
        self.start
    }

    /// Returns the end line/column position.
    #[must_use]
    pub const fn end(&self) -> LineCol {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end_byte.saturating_sub(self.start_byte)
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start_byte >= self.end_byte
    }

    /// Returns `true` if this span lies within `other`, inclusive at both
    /// ends.
    #[must_use]
    pub const fn is_inside(&self, other: &Self) -> bool {
        self.start_byte >= other.start_byte && self.end_byte <= other.end_byte
    }

    /// Returns `true` if this span encloses `other`, inclusive at both ends.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        other.is_inside(self)
    }

    /// Returns `true` if this span begins at or after the end of `other`.
    #[must_use]
    pub const fn follows(&self, other: &Self) -> bool {
        self.start_byte >= other.end_byte
    }

    /// Returns `true` if this span ends at or before the start of `other`.
    #[must_use]
    pub const fn precedes(&self, other: &Self) -> bool {
        self.end_byte <= other.start_byte
    }
}
