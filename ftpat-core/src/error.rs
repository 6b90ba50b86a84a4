//! Error taxonomy for tokenization and unrolling.
//!
//! Every variant here corresponds to one of the named failure categories the
//! original C scanner reported through a single global message string; here
//! each is a value carrying its own byte offset.

use thiserror::Error;

use ftpat_util::DiagnosticCode;

/// Failures the tokenizer can report, each anchored to the byte offset where
/// the offending input was encountered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unexpected end of pattern at byte {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unknown escape `\\{escaped}` at byte {offset}")]
    UnknownEscape { offset: usize, escaped: char },

    #[error("unknown character class `\\_{escaped}` at byte {offset}")]
    UnknownClass { offset: usize, escaped: char },

    #[error("invalid count atom at byte {offset}")]
    InvalidCount { offset: usize },

    #[error("unclosed character set starting at byte {offset}")]
    UnclosedSet { offset: usize },

    #[error("unsupported character `{found}` inside set at byte {offset}")]
    UnsupportedSetChar { offset: usize, found: char },

    #[error("unmatched group close at byte {offset}")]
    UnmatchedGroupClose { offset: usize },

    #[error("unclosed group, {open} group(s) still open at end of pattern")]
    UnclosedGroup { open: u32 },
}

impl TokenizeError {
    /// Byte offset of the first offending character, for variants that carry one.
    /// `UnclosedGroup` has no single offending byte — it's a property of the
    /// whole stream at end of input — so it returns `None`.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            TokenizeError::UnexpectedEnd { offset } => Some(offset),
            TokenizeError::UnknownEscape { offset, .. } => Some(offset),
            TokenizeError::UnknownClass { offset, .. } => Some(offset),
            TokenizeError::InvalidCount { offset } => Some(offset),
            TokenizeError::UnclosedSet { offset } => Some(offset),
            TokenizeError::UnsupportedSetChar { offset, .. } => Some(offset),
            TokenizeError::UnmatchedGroupClose { offset } => Some(offset),
            TokenizeError::UnclosedGroup { .. } => None,
        }
    }

    /// Stable diagnostic code identifying this failure category.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            TokenizeError::UnexpectedEnd { .. } => DiagnosticCode::UNEXPECTED_END,
            TokenizeError::UnknownEscape { .. } => DiagnosticCode::UNKNOWN_ESCAPE,
            TokenizeError::UnknownClass { .. } => DiagnosticCode::UNKNOWN_CLASS,
            TokenizeError::InvalidCount { .. } => DiagnosticCode::INVALID_COUNT,
            TokenizeError::UnclosedSet { .. } => DiagnosticCode::UNCLOSED_SET,
            TokenizeError::UnsupportedSetChar { .. } => DiagnosticCode::UNSUPPORTED_SET_CHAR,
            TokenizeError::UnmatchedGroupClose { .. } => DiagnosticCode::UNMATCHED_GROUP_CLOSE,
            TokenizeError::UnclosedGroup { .. } => DiagnosticCode::UNCLOSED_GROUP,
        }
    }
}

pub type TokenizeResult<T> = Result<T, TokenizeError>;

/// Failures the unroller can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnrollError {
    #[error("pattern is empty")]
    EmptyPattern,

    #[error("alternation nesting exceeds the maximum depth of {max}")]
    TooDeep { max: u32 },

    #[error("unroll stack exceeds capacity of {capacity}")]
    StackOverflow { capacity: usize },
}

impl UnrollError {
    /// Stable diagnostic code identifying this failure category. The
    /// unroller has no single offending byte to anchor a span to — its
    /// failures are properties of the whole expansion, not one position.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            UnrollError::EmptyPattern => DiagnosticCode::EMPTY_PATTERN,
            UnrollError::TooDeep { .. } => DiagnosticCode::TOO_DEEP,
            UnrollError::StackOverflow { .. } => DiagnosticCode::STACK_OVERFLOW,
        }
    }
}

pub type UnrollResult<T> = Result<T, UnrollError>;
