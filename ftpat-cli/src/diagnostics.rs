//! Builds [`Diagnostic`]s from tokenizer/unroller failures for the `-d`
//! human-readable rendering path. The JSON path never touches this module --
//! it serializes the error's `Display` message directly.

use ftpat_core::{TokenizeError, UnrollError};
use ftpat_util::{Diagnostic, DiagnosticBuilder, Span};

/// Patterns are always a single source line, so `line` is always `1`;
/// `column` is the character count before the byte offset, plus one.
fn span_at(pattern: &str, offset: usize) -> Span {
    let offset = offset.min(pattern.len());
    let column = pattern[..offset].chars().count() as u32 + 1;
    Span::point(offset, 1, column)
}

/// Builds the diagnostic for a tokenize failure against the pattern text it
/// came from, so the span lines up with the offending byte.
pub fn tokenize_diagnostic(pattern: &str, err: &TokenizeError) -> Diagnostic {
    let span = match err.offset() {
        Some(offset) => span_at(pattern, offset),
        None => Span::DUMMY,
    };
    DiagnosticBuilder::error(err.to_string()).span(span).code(err.code()).build()
}

/// Unroll failures are a property of the whole expansion, not one byte, so
/// they carry no span beyond the dummy default.
pub fn unroll_diagnostic(err: &UnrollError) -> Diagnostic {
    DiagnosticBuilder::error(err.to_string()).code(err.code()).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_diagnostic_carries_the_offending_column() {
        let err = TokenizeError::UnknownEscape { offset: 2, escaped: 'q' };
        let diag = tokenize_diagnostic("a\\q", &err);
        assert_eq!(diag.span.line, 1);
        assert_eq!(diag.span.column, 3);
        assert_eq!(diag.code, Some(ftpat_util::DiagnosticCode::UNKNOWN_ESCAPE));
    }

    #[test]
    fn tokenize_diagnostic_falls_back_to_dummy_span_without_an_offset() {
        let err = TokenizeError::UnclosedGroup { open: 1 };
        let diag = tokenize_diagnostic("{a", &err);
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn unroll_diagnostic_carries_its_code() {
        let diag = unroll_diagnostic(&UnrollError::EmptyPattern);
        assert_eq!(diag.code, Some(ftpat_util::DiagnosticCode::EMPTY_PATTERN));
    }
}
