//! Walks a vim-script-shaped file line by line looking for `autocmd`
//! directives, the way the reference tool's non-raw mode does.
//!
//! Each candidate line is split into whitespace-delimited fields by hand
//! (command name, event list, pattern, then the remainder of the line as the
//! command body) rather than with a general tokenizer, since the only
//! structure that matters here is "four fields, the last one greedy". Lines
//! that don't look like a recognized `autocmd` — including continuation
//! lines starting with `\`, which the reference scanner also leaves
//! unmerged — are skipped rather than treated as errors.

use std::io::BufRead;

use ftpat_core::{match_autocmd, match_events};

use crate::error::ScanResult;

/// One `autocmd` directive pulled out of a script, with its source line for
/// diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub events: String,
    pub pattern: String,
    pub command: String,
    pub line: u32,
}

/// Scans every line available from `reader`, returning the `autocmd` rules
/// found in source order. Lines that are blank, comments, continuations, or
/// any other non-matching shape are silently skipped.
pub fn scan_script<R: BufRead>(reader: R) -> ScanResult<Vec<Rule>> {
    let mut rules = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(rule) = scan_line(&line, idx as u32 + 1) {
            rules.push(rule);
        }
    }
    Ok(rules)
}

fn skip_whitespace(line: &str, pos: usize) -> Option<usize> {
    let rest = line.get(pos..)?;
    rest.find(|c: char| !c.is_whitespace()).map(|off| pos + off)
}

fn next_field(line: &str, pos: usize) -> (&str, usize) {
    let rest = &line[pos..];
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    (&rest[..end], pos + end)
}

fn scan_line(line: &str, lnum: u32) -> Option<Rule> {
    let pos = skip_whitespace(line, 0)?;
    if !line[pos..].starts_with('a') {
        return None;
    }

    let (command_name, pos) = next_field(line, pos);
    if !match_autocmd(command_name) {
        return None;
    }
    let pos = skip_whitespace(line, pos)?;

    let (events, pos) = next_field(line, pos);
    if !match_events(events) {
        return None;
    }
    let pos = skip_whitespace(line, pos)?;

    let (pattern, pos) = next_field(line, pos);
    let pos = skip_whitespace(line, pos)?;

    let command = line[pos..].to_string();

    Some(Rule { events: events.to_string(), pattern: pattern.to_string(), command, line: lnum })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn rules(script: &str) -> Vec<Rule> {
        scan_script(Cursor::new(script)).expect("scan")
    }

    #[test]
    fn recognizes_a_basic_autocmd() {
        let found = rules("autocmd BufNewFile,BufRead *.rs call Setup()\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].events, "BufNewFile,BufRead");
        assert_eq!(found[0].pattern, "*.rs");
        assert_eq!(found[0].command, "call Setup()");
        assert_eq!(found[0].line, 1);
    }

    #[test]
    fn accepts_abbreviated_command_and_bang() {
        let found = rules("au! BufNewFile,BufReadPost *.py setlocal ft=python\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pattern, "*.py");
    }

    #[test]
    fn skips_lines_without_a_matching_event_set() {
        assert!(rules("autocmd BufWritePre *.rs call Foo()\n").is_empty());
    }

    #[test]
    fn skips_unrelated_lines() {
        let found = rules("\" a comment\nlet g:x = 1\naugroup MyGroup\n");
        assert!(found.is_empty());
    }

    #[test]
    fn continuation_lines_are_not_merged() {
        let found = rules("autocmd BufNewFile,BufRead *.rs call Foo(\n  \\ 1, 2)\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, "call Foo(");
    }

    #[test]
    fn tracks_line_numbers_across_a_script() {
        let found = rules(
            "\" header\n\
             autocmd BufNewFile,BufRead *.a call A()\n\
             autocmd BufNewFile,BufRead *.b call B()\n",
        );
        assert_eq!(found[0].line, 2);
        assert_eq!(found[1].line, 3);
    }
}
