//! Builds the per-pattern JSON report described in the external interface:
//! `{pattern, lnum?, cmd?, tree?, result?, error?}`.
//!
//! `render_json`'s escaping in the reference tool is handled for free here:
//! `serde_json` escapes string contents when serializing, so there is no
//! hand-rolled `write_escaped` equivalent.

use serde::Serialize;

use ftpat_core::{Token, TokenKind};
use ftpat_util::Diagnostic;

/// A nested view of a pattern's alternation structure. The whole pattern is
/// treated as one implicit top-level group so root-level `,` alternation
/// renders the same way as a bracketed one.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum TreeNode {
    #[serde(rename = "leaf")]
    Leaf { value: String },
    #[serde(rename = "group")]
    Group { alternatives: Vec<Vec<TreeNode>> },
}

pub fn build_tree(tokens: &[Token<'_>]) -> TreeNode {
    let mut stack: Vec<Vec<Vec<TreeNode>>> = vec![vec![Vec::new()]];
    for tok in tokens {
        match tok.kind() {
            TokenKind::Push => stack.push(vec![Vec::new()]),
            TokenKind::Branch => stack.last_mut().unwrap().push(Vec::new()),
            TokenKind::Pop => {
                let alternatives = stack.pop().unwrap();
                let node = TreeNode::Group { alternatives };
                push_leaf(&mut stack, node);
            }
            TokenKind::Empty => push_leaf(&mut stack, TreeNode::Leaf { value: String::new() }),
            TokenKind::End => {}
            _ => push_leaf(&mut stack, TreeNode::Leaf { value: tok.text().to_string() }),
        }
    }
    let alternatives = stack.pop().expect("root group always present");
    TreeNode::Group { alternatives }
}

fn push_leaf(stack: &mut [Vec<Vec<TreeNode>>], node: TreeNode) {
    stack.last_mut().unwrap().last_mut().unwrap().push(node);
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternReport {
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lnum: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Richer diagnostic for the same failure as `error`, used only by the
    /// `-d` human-readable rendering path; never serialized to JSON.
    #[serde(skip)]
    pub diagnostic: Option<Diagnostic>,
}

/// Renders reports as the human-readable text the `-d` flag selects: the
/// pattern's source line, then one indented line per unrolled expansion (or
/// an indented error line if the pattern failed).
pub fn render_human(reports: &[PatternReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&report.pattern);
        out.push('\n');
        if let Some(diag) = &report.diagnostic {
            out.push_str("    error: ");
            out.push_str(&diag.to_string());
            out.push('\n');
            continue;
        }
        if let Some(err) = &report.error {
            out.push_str("    error: ");
            out.push_str(err);
            out.push('\n');
            continue;
        }
        if let Some(result) = &report.result {
            for expansion in result {
                out.push_str("    ");
                out.push_str(expansion);
                out.push('\n');
            }
        }
    }
    out
}
