//! Expands a tokenized pattern's alternations into the list of literal-token
//! sequences it represents.
//!
//! The recursive walk below mirrors the reference scanner's `unroll_rec`
//! exactly, including its two quirks: a matched alternative is explored by
//! recursing into the *entire remaining suffix* (so content after the
//! group's close is folded into every alternative automatically), and the
//! scratch stack is restored to its pre-recursion length after each sibling
//! alternative rather than being rebuilt from scratch. Unlike the reference,
//! both the stack and the result list live on this call's `Unroller`, not in
//! process-global storage, so two unrolls can run concurrently without
//! interfering with each other.

use crate::error::{UnrollError, UnrollResult};
use crate::token::{Token, TokenKind, TokenStream};

/// Hard cap on alternation nesting depth.
pub const MAX_DEPTH: u32 = 8;
/// Hard cap on the number of tokens a single expansion may accumulate.
pub const STACK_CAPACITY: usize = 256;

/// Expands every alternation in `stream` into its cross-product of literal
/// token sequences, in source order.
pub fn unroll<'a>(stream: &TokenStream<'a>) -> UnrollResult<Vec<Vec<Token<'a>>>> {
    let toks = stream.raw();
    if toks.is_empty() || toks[0].kind() == TokenKind::End {
        return Err(UnrollError::EmptyPattern);
    }

    let mut unroller = Unroller { toks, stack: Vec::new(), out: Vec::new() };

    let mut beg = 0usize;
    let mut i = 0usize;
    while toks[i].kind() != TokenKind::End {
        if toks[i].level() == 0 && toks[i].kind() == TokenKind::Branch {
            unroller.stack.clear();
            unroller.walk(beg, 0)?;
            beg = i + 1;
        }
        i += 1;
    }
    unroller.stack.clear();
    unroller.walk(beg, 0)?;

    Ok(unroller.out)
}

/// Concatenates an expansion's token slices back into the literal string it represents.
pub fn render<'a>(expansion: &[Token<'a>]) -> String {
    expansion.iter().map(|t| t.text()).collect()
}

struct Unroller<'a, 'b> {
    toks: &'b [Token<'a>],
    stack: Vec<Token<'a>>,
    out: Vec<Vec<Token<'a>>>,
}

impl<'a, 'b> Unroller<'a, 'b> {
    /// Explores one alternative starting at `start`, assuming its enclosing
    /// group (if any) is at nesting level `lvl`.
    fn walk(&mut self, start: usize, lvl: u32) -> UnrollResult<()> {
        if self.toks[start].kind() == TokenKind::End {
            return Ok(());
        }
        if lvl > MAX_DEPTH {
            return Err(UnrollError::TooDeep { max: MAX_DEPTH });
        }

        let mut left = false;
        let mut i = start;

        loop {
            if self.toks[i].kind() == TokenKind::End {
                break;
            }
            let kind = self.toks[i].kind();
            let level = self.toks[i].level();

            if level < lvl {
                left = true;
            }

            if !left && level == lvl {
                if kind == TokenKind::Branch {
                    // another alternative at our own level: skip past it to
                    // the matching close, the sibling recursion (driven by
                    // whoever opened this group) already covers it.
                    loop {
                        let k = self.toks[i].kind();
                        if k == TokenKind::End {
                            break;
                        }
                        let l = self.toks[i].level();
                        if !(l >= lvl && !(l == lvl && k == TokenKind::Pop)) {
                            break;
                        }
                        i += 1;
                    }
                    continue;
                } else if kind == TokenKind::Pop {
                    left = true;
                    i += 1;
                    continue;
                }
            }

            if kind == TokenKind::Push {
                let tlvl = level;
                i += 1;
                let saved = self.stack.len();
                self.walk(i, tlvl)?;
                self.stack.truncate(saved);

                loop {
                    let k = self.toks[i].kind();
                    if k == TokenKind::End {
                        break;
                    }
                    let l = self.toks[i].level();
                    if l < tlvl {
                        break;
                    }
                    if l == tlvl {
                        if k == TokenKind::Pop {
                            break;
                        }
                        if k == TokenKind::Branch {
                            i += 1;
                            let saved2 = self.stack.len();
                            self.walk(i, tlvl)?;
                            self.stack.truncate(saved2);
                        }
                    }
                    i += 1;
                }
                return Ok(());
            }

            if kind == TokenKind::Branch {
                if level <= lvl {
                    break;
                }
                i += 1;
                continue;
            }

            if kind == TokenKind::Pop {
                if level == lvl {
                    break;
                }
                i += 1;
                continue;
            }

            if self.stack.len() >= STACK_CAPACITY {
                return Err(UnrollError::StackOverflow { capacity: STACK_CAPACITY });
            }
            self.stack.push(self.toks[i]);
            i += 1;
        }

        self.record(lvl);
        Ok(())
    }

    fn record(&mut self, lvl: u32) {
        // root-level alternatives made up entirely of Empty placeholders
        // came from a leading/trailing bare `,` and are not materialized.
        if lvl == 0 && self.stack.iter().all(|t| t.kind() == TokenKind::Empty) {
            return;
        }
        self.out.push(self.stack.clone());
    }
}
