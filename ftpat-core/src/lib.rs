//! Tokenizer and brace-expansion unroller for the hybrid glob/regex pattern
//! language used in autocommand-style directives.
//!
//! ```
//! use ftpat_core::{tokenize, unroll, render};
//!
//! let stream = tokenize("a{b,c}d").unwrap();
//! let expansions: Vec<String> = unroll(&stream).unwrap().iter().map(|e| render(e)).collect();
//! assert_eq!(expansions, vec!["abd", "acd"]);
//! ```

mod cursor;
mod error;
mod matchers;
mod token;
mod tokenizer;
mod unroll;

pub use error::{TokenizeError, TokenizeResult, UnrollError, UnrollResult};
pub use matchers::{match_autocmd, match_events};
pub use token::{Token, TokenKind, TokenStream};
pub use tokenizer::tokenize;
pub use unroll::{render, unroll, MAX_DEPTH, STACK_CAPACITY};
