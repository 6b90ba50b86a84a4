//! Source location tracking.
//!
//! Patterns are parsed one at a time from a single in-memory string, so a
//! `Span` only needs a byte range plus the line/column of its start -- unlike
//! a multi-file compiler there is no `FileId` to carry around.

/// A byte range into the pattern text being tokenized, with the line/column
/// of its start for human-readable diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0, line: 1, column: 1 };

    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self { start, end, line, column }
    }

    /// A zero-width span at a single position.
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
