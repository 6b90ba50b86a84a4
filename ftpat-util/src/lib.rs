//! Shared span and diagnostic types used by the tokenizer, unroller, scanner
//! and CLI crates.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
