//! Character cursor for scanning pattern text.
//!
//! Patterns are short (one line of an editor config at most) so there is no
//! need for the byte-oriented fast paths a full source-file lexer would want;
//! this keeps the ASCII/UTF-8 split from the lexer it's grounded on but drops
//! the byte-counting helpers that only pay off on longer inputs.

/// Walks a pattern string one character at a time, tracking byte offset and
/// 1-based line/column for diagnostics.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, position: 0, line: 1, column: 1 }
    }

    /// Character at the cursor, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Character `offset` characters ahead of the cursor, or `'\0'` past the end.
    pub fn peek_char(&self, offset: usize) -> char {
        let mut chars = self.source[self.position..].chars();
        for _ in 0..offset {
            chars.next();
        }
        chars.next().unwrap_or('\0')
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot { position: self.position, line: self.line, column: self.column }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// Saved cursor state for backtracking, e.g. when a `Count` atom turns out malformed.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_ascii() {
        let mut c = Cursor::new("ab}");
        assert_eq!(c.current_char(), 'a');
        c.advance();
        assert_eq!(c.current_char(), 'b');
        c.advance();
        assert_eq!(c.current_char(), '}');
        c.advance();
        assert_eq!(c.current_char(), '\0');
        assert!(c.is_at_end());
    }

    #[test]
    fn peek_does_not_move_position() {
        let c = Cursor::new("abc");
        assert_eq!(c.peek_char(2), 'c');
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn slice_from_captures_consumed_range() {
        let mut c = Cursor::new("abc}");
        let start = c.position();
        c.advance_n(3);
        assert_eq!(c.slice_from(start), "abc");
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut c = Cursor::new("a{b,c}");
        let snap = c.snapshot();
        c.advance_n(4);
        c.restore(snap);
        assert_eq!(c.position(), 0);
        assert_eq!(c.current_char(), 'a');
    }

    #[test]
    fn tracks_line_and_column() {
        let mut c = Cursor::new("a\nb");
        c.advance();
        c.advance();
        assert_eq!(c.line(), 2);
        assert_eq!(c.column(), 1);
    }

    #[test]
    fn match_char_consumes_on_success_only() {
        let mut c = Cursor::new("{a");
        assert!(c.match_char('{'));
        assert!(!c.match_char('{'));
        assert_eq!(c.current_char(), 'a');
    }
}
