//! Prefix/keyword gates used when scanning script lines for autocommand
//! rules, independent of pattern tokenizing.

/// Recognizes `au`, `aut`, ..., `autocmd`, any of those with a trailing `!`,
/// and nothing else. Mirrors vim's own abbreviation rules for the command name.
pub fn match_autocmd(s: &str) -> bool {
    const FULL: &str = "autocmd";
    let bytes = s.as_bytes();
    let full = FULL.as_bytes();
    if bytes.len() < 2 || bytes[0] != full[0] || bytes[1] != full[1] {
        return false;
    }

    let ends_here = |rest: &[u8]| rest.is_empty() || rest == b"!";
    for len in 2..=full.len() {
        if bytes.len() < len || bytes[..len] != full[..len] {
            return false;
        }
        if ends_here(&bytes[len..]) {
            return true;
        }
    }
    false
}

/// Whether a comma-separated event list includes `BufNewFile` alongside
/// `BufRead` or `BufReadPost` (case-insensitive, names truncated to 15
/// characters before comparison, matching the reference scanner's fixed
/// event-name buffer).
pub fn match_events(s: &str) -> bool {
    const MAX_NAME: usize = 15;

    let mut bufnewfile = false;
    let mut bufread = false;
    let mut bufreadpost = false;

    for part in s.split(',') {
        let name: String = part.chars().take(MAX_NAME).map(|c| c.to_ascii_lowercase()).collect();
        match name.as_str() {
            "bufnewfile" => bufnewfile = true,
            "bufread" => bufread = true,
            "bufreadpost" => bufreadpost = true,
            _ => {}
        }
    }

    bufnewfile && (bufread || bufreadpost)
}
