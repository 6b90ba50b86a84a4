//! Diagnostic collection and fluent construction.
//!
//! ```
//! use ftpat_util::diagnostic::{DiagnosticBuilder, Handler};
//! use ftpat_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unclosed group")
//!     .span(Span::DUMMY)
//!     .help("add a matching `}`")
//!     .emit(&handler);
//! assert!(handler.has_errors());
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::Span;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        };
        write!(f, "{name}")
    }
}

/// A stable, machine-checkable identifier for a diagnostic's failure
/// category, independent of its human-readable message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Tokenizer failures.
    pub const UNEXPECTED_END: Self = Self::new("E", 1001);
    pub const UNKNOWN_ESCAPE: Self = Self::new("E", 1002);
    pub const UNKNOWN_CLASS: Self = Self::new("E", 1003);
    pub const INVALID_COUNT: Self = Self::new("E", 1004);
    pub const UNCLOSED_SET: Self = Self::new("E", 1005);
    pub const UNSUPPORTED_SET_CHAR: Self = Self::new("E", 1006);
    pub const UNMATCHED_GROUP_CLOSE: Self = Self::new("E", 1007);
    pub const UNCLOSED_GROUP: Self = Self::new("E", 1008);

    // Unroller failures.
    pub const EMPTY_PATTERN: Self = Self::new("E", 2001);
    pub const TOO_DEEP: Self = Self::new("E", 2002);
    pub const STACK_OVERFLOW: Self = Self::new("E", 2003);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single diagnostic message with severity and source location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self { level, message: message.into(), span, code: None, notes: Vec::new(), helps: Vec::new() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => {
                write!(f, "{}[{}]: {} (at {}:{})", self.level, code, self.message, self.span.line, self.span.column)
            }
            None => write!(f, "{}: {} (at {}:{})", self.level, self.message, self.span.line, self.span.column),
        }
    }
}

/// Fluent constructor for a [`Diagnostic`].
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    fn new(level: Level, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), span: Span::DUMMY, code: None, notes: Vec::new(), helps: Vec::new() }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}

/// Collects diagnostics produced over the course of a run.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Error).count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_emits_into_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("bad pattern").span(Span::point(3, 1, 4)).emit(&handler);
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn warning_does_not_count_as_error() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("suspicious pattern").emit(&handler);
        assert!(!handler.has_errors());
    }

    #[test]
    fn clear_resets_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("x").emit(&handler);
        handler.clear();
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn display_includes_location() {
        let diag = DiagnosticBuilder::error("oops").span(Span::point(0, 2, 5)).build();
        assert_eq!(diag.to_string(), "error: oops (at 2:5)");
    }

    #[test]
    fn display_includes_code_when_present() {
        let diag = DiagnosticBuilder::error("unclosed group")
            .span(Span::point(0, 1, 1))
            .code(DiagnosticCode::UNCLOSED_GROUP)
            .build();
        assert_eq!(diag.to_string(), "error[E1008]: unclosed group (at 1:1)");
    }

    #[test]
    fn diagnostic_code_formats_as_prefix_plus_padded_number() {
        assert_eq!(DiagnosticCode::new("E", 7).as_str(), "E0007");
    }
}
