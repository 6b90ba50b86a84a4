//! Turns a raw pattern string into a flat, level-annotated [`TokenStream`].
//!
//! The character dispatch below mirrors the reference scanner's `tokenize`
//! one-to-one: group delimiters, the `\(...\|...\)` regex equivalents,
//! bracketed sets, and the vim/lua count-atom `\{...\}` form are each
//! recognized inline, literal runs are coalesced by holding a pending start
//! offset until the next non-literal token forces a flush, and an `Empty`
//! placeholder is spliced in wherever two alternation delimiters sit back to
//! back so the unroller never has to special-case adjacency.

use crate::cursor::Cursor;
use crate::error::{TokenizeError, TokenizeResult};
use crate::token::{Token, TokenKind, TokenStream};

const CHARACTER_CLASSES: &str = "iIkKfFpPsSdDxXoOwWhHaAlLuU";
const REGEX_OPTS: &str = "cCZmMvV";
const ESCAPED_LITERALS: &str = ",?{}";

/// Tokenizes `pattern`, returning a level-annotated stream ending in an
/// internal `End` sentinel.
pub fn tokenize<'a>(pattern: &'a str) -> TokenizeResult<TokenStream<'a>> {
    let mut cur = Cursor::new(pattern);
    let mut toks: Vec<Token<'a>> = Vec::new();
    let mut literal_start: Option<usize> = None;

    while !cur.is_at_end() {
        let start = cur.position();
        let is_literal = dispatch(&mut cur, &mut toks, start)?;

        if is_literal {
            if literal_start.is_none() {
                literal_start = Some(start);
            }
        } else {
            if let Some(ls) = literal_start.take() {
                let pushed = toks.pop().expect("dispatch pushed a token");
                toks.push(Token::new(TokenKind::Literal, &pattern[ls..start], ls));
                toks.push(pushed);
            }
            insert_empty_if_needed(&mut toks);
        }
    }

    if let Some(ls) = literal_start {
        toks.push(Token::new(TokenKind::Literal, &pattern[ls..cur.position()], ls));
    } else {
        insert_empty_if_needed(&mut toks);
    }

    assign_levels(&mut toks)?;
    toks.push(Token::new(TokenKind::End, "", pattern.len()));

    Ok(TokenStream::new(toks))
}

/// Consumes one logical atom starting at `start`, pushing its token(s) onto
/// `toks`. Returns whether the atom was a plain literal character (in which
/// case nothing was pushed and the caller accumulates a literal run).
fn dispatch<'a>(cur: &mut Cursor<'a>, toks: &mut Vec<Token<'a>>, start: usize) -> TokenizeResult<bool> {
    match cur.current_char() {
        '{' => {
            cur.advance();
            toks.push(Token::new(TokenKind::Push, cur.slice_from(start), start));
        }
        '}' => {
            cur.advance();
            toks.push(Token::new(TokenKind::Pop, cur.slice_from(start), start));
        }
        ',' => {
            cur.advance();
            toks.push(Token::new(TokenKind::Branch, cur.slice_from(start), start));
        }
        '\\' => return dispatch_escape(cur, toks, start),
        '[' => return dispatch_set(cur, toks, start),
        '*' => {
            cur.advance();
            toks.push(Token::new(TokenKind::AnyChars, cur.slice_from(start), start));
        }
        '?' => {
            cur.advance();
            toks.push(Token::new(TokenKind::AnyChar, cur.slice_from(start), start));
        }
        _ => {
            cur.advance();
            return Ok(true);
        }
    }
    Ok(false)
}

fn dispatch_escape<'a>(cur: &mut Cursor<'a>, toks: &mut Vec<Token<'a>>, start: usize) -> TokenizeResult<bool> {
    cur.advance(); // consume '\'
    if cur.is_at_end() {
        return Err(TokenizeError::UnexpectedEnd { offset: start });
    }
    let c = cur.current_char();

    if c == '(' {
        cur.advance();
        toks.push(Token::new(TokenKind::Push, cur.slice_from(start), start));
    } else if c == ')' {
        cur.advance();
        toks.push(Token::new(TokenKind::Pop, cur.slice_from(start), start));
    } else if c == '|' {
        cur.advance();
        toks.push(Token::new(TokenKind::Branch, cur.slice_from(start), start));
    } else if ESCAPED_LITERALS.contains(c) {
        cur.advance();
        return Ok(true);
    } else if c == '*' {
        cur.advance();
        toks.push(Token::new(TokenKind::ZeroOrMore, cur.slice_from(start), start));
    } else if c == '+' {
        cur.advance();
        toks.push(Token::new(TokenKind::OneOrMore, cur.slice_from(start), start));
    } else if c == '=' {
        cur.advance();
        toks.push(Token::new(TokenKind::ZeroOrOne, cur.slice_from(start), start));
    } else if CHARACTER_CLASSES.contains(c) {
        cur.advance();
        toks.push(Token::new(TokenKind::Cls, cur.slice_from(start), start));
    } else if c == '_' {
        cur.advance();
        if cur.is_at_end() {
            return Err(TokenizeError::UnexpectedEnd { offset: start });
        }
        let class = cur.current_char();
        if CHARACTER_CLASSES.contains(class) {
            cur.advance();
            toks.push(Token::new(TokenKind::Cls, cur.slice_from(start), start));
        } else {
            return Err(TokenizeError::UnknownClass { offset: start, escaped: class });
        }
    } else if c == '\\' {
        cur.advance();
        if cur.is_at_end() {
            return Err(TokenizeError::UnexpectedEnd { offset: start });
        }
        if cur.current_char() == '{' {
            return dispatch_count(cur, toks, start);
        }
        return Err(TokenizeError::UnknownEscape { offset: start, escaped: cur.current_char() });
    } else if REGEX_OPTS.contains(c) {
        cur.advance();
        toks.push(Token::new(TokenKind::Opts, cur.slice_from(start), start));
    } else {
        return Err(TokenizeError::UnknownEscape { offset: start, escaped: c });
    }
    Ok(false)
}

/// Consumes the vim/lua count atom `\\{[-]n[,m]\}` once the opening
/// `\{` has been recognized (`cur` sits on the `{`).
fn dispatch_count<'a>(cur: &mut Cursor<'a>, toks: &mut Vec<Token<'a>>, start: usize) -> TokenizeResult<bool> {
    cur.advance(); // consume '{'
    if cur.is_at_end() {
        return Err(TokenizeError::UnexpectedEnd { offset: start });
    }
    if cur.current_char() == '-' {
        cur.advance();
    }
    while cur.current_char().is_ascii_digit() {
        cur.advance();
    }
    if cur.current_char() == ',' {
        cur.advance();
    }
    while cur.current_char().is_ascii_digit() {
        cur.advance();
    }
    if cur.current_char() != '\\' {
        return Err(TokenizeError::InvalidCount { offset: start });
    }
    cur.advance();
    if cur.current_char() != '}' {
        return Err(TokenizeError::InvalidCount { offset: start });
    }
    cur.advance();
    toks.push(Token::new(TokenKind::Count, cur.slice_from(start), start));
    Ok(false)
}

fn dispatch_set<'a>(cur: &mut Cursor<'a>, toks: &mut Vec<Token<'a>>, start: usize) -> TokenizeResult<bool> {
    cur.advance(); // consume '['
    if cur.is_at_end() {
        return Err(TokenizeError::UnclosedSet { offset: start });
    }
    if cur.current_char() == '^' {
        cur.advance();
    }
    let mut nested = false;
    loop {
        if cur.is_at_end() {
            return Err(TokenizeError::UnclosedSet { offset: start });
        }
        let c = cur.current_char();
        if c == '[' {
            if nested {
                return Err(TokenizeError::UnsupportedSetChar { offset: cur.position(), found: c });
            }
            nested = true;
            cur.advance();
        } else if c == ']' {
            cur.advance();
            if nested {
                nested = false;
            } else {
                break;
            }
        } else if c.is_ascii_alphanumeric() || "-_.:".contains(c) {
            cur.advance();
        } else {
            return Err(TokenizeError::UnsupportedSetChar { offset: cur.position(), found: c });
        }
    }
    toks.push(Token::new(TokenKind::Set, cur.slice_from(start), start));
    Ok(false)
}

/// Splices an `Empty` placeholder between two adjacent alternation
/// delimiters (`{,`, `,}`, `,,`, `{}`, ...) so every alternative, even an
/// empty one, has a real token to represent it.
fn insert_empty_if_needed(toks: &mut Vec<Token<'_>>) {
    if toks.len() < 2 {
        return;
    }
    let t1 = toks[toks.len() - 1].kind();
    let t2 = toks[toks.len() - 2].kind();
    let closes = matches!(t1, TokenKind::Branch | TokenKind::Pop);
    let opens = matches!(t2, TokenKind::Push | TokenKind::Branch);
    if closes && opens {
        let last = toks.pop().expect("checked len above");
        toks.push(Token::new(TokenKind::Empty, "", last.offset()));
        toks.push(last);
    }
}

fn assign_levels(toks: &mut [Token<'_>]) -> TokenizeResult<()> {
    let mut level: i64 = 0;
    for tok in toks.iter_mut() {
        match tok.kind() {
            TokenKind::Push => {
                level += 1;
                tok.set_level(level as u32);
            }
            TokenKind::Pop => {
                tok.set_level(level as u32);
                level -= 1;
                if level < 0 {
                    return Err(TokenizeError::UnmatchedGroupClose { offset: tok.offset() });
                }
            }
            _ => tok.set_level(level as u32),
        }
    }
    if level != 0 {
        return Err(TokenizeError::UnclosedGroup { open: level as u32 });
    }
    Ok(())
}
