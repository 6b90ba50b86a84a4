//! ftpat - tokenizes and unrolls autocommand-style patterns.
//!
//! This is the main entry point for the `ftpat` CLI. It scans a script for
//! `autocmd` directives (or, with `-p`, reads one raw pattern per line), then
//! tokenizes and optionally unrolls each pattern, printing a JSON report per
//! pattern.

mod config;
mod diagnostics;
mod error;
mod render;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{CliError, Result};
use ftpat_scan::scan_script;
use ftpat_util::Handler;
use render::{build_tree, render_human, PatternReport};

/// ftpat - tokenize and unroll autocommand-style patterns.
#[derive(Parser, Debug)]
#[command(name = "ftpat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizes and unrolls autocommand-style patterns", long_about = None)]
struct Cli {
    /// Script to scan, or a raw pattern file with `-p`. Use `-` for stdin.
    file: String,

    /// Treat input as one raw pattern per line instead of scanning for autocmd rules.
    #[arg(short = 'p')]
    raw_patterns: bool,

    /// Compute and include the unrolled expansions.
    #[arg(short = 'u')]
    unroll: bool,

    /// Omit the alternation tree from the output.
    #[arg(short = 't')]
    no_tree: bool,

    /// Render plain text instead of JSON.
    #[arg(short = 'd')]
    no_json: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "FTPAT_VERBOSE")]
    verbose: bool,

    /// Path to a configuration file.
    #[arg(long, global = true, env = "FTPAT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, config.no_color)?;

    let include_tree = !cli.no_tree && config.tree;
    let as_json = !cli.no_json && config.json;

    let reports = if cli.file == "-" {
        run(io::stdin().lock(), cli.raw_patterns, cli.unroll, include_tree)?
    } else {
        let file = File::open(&cli.file)?;
        run(BufReader::new(file), cli.raw_patterns, cli.unroll, include_tree)?
    };

    let mut stdout = io::stdout().lock();
    if as_json {
        serde_json::to_writer_pretty(&mut stdout, &reports)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_human(&reports))?;

        let handler = Handler::new();
        for diagnostic in reports.iter().filter_map(|r| r.diagnostic.clone()) {
            handler.emit(diagnostic);
        }
        if handler.has_errors() {
            writeln!(stdout, "{} error(s)", handler.error_count())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false).with_ansi(!no_color))
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn run<R: BufRead>(
    mut reader: R,
    raw_patterns: bool,
    unroll: bool,
    include_tree: bool,
) -> Result<Vec<PatternReport>> {
    let entries: Vec<(String, Option<u32>, Option<String>)> = if raw_patterns {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.lines()
            .filter_map(|line| {
                let pattern = line.split_whitespace().next()?;
                Some((pattern.to_string(), None, None))
            })
            .collect()
    } else {
        scan_script(reader)?
            .into_iter()
            .map(|rule| (rule.pattern, Some(rule.line), Some(rule.command)))
            .collect()
    };

    Ok(entries
        .into_iter()
        .map(|(pattern, lnum, cmd)| build_report(pattern, lnum, cmd, unroll, include_tree))
        .collect())
}

fn build_report(
    pattern: String,
    lnum: Option<u32>,
    cmd: Option<String>,
    unroll: bool,
    include_tree: bool,
) -> PatternReport {
    match ftpat_core::tokenize(&pattern) {
        Err(e) => {
            let diagnostic = diagnostics::tokenize_diagnostic(&pattern, &e);
            PatternReport {
                pattern,
                lnum,
                cmd,
                tree: None,
                result: None,
                error: Some(e.to_string()),
                diagnostic: Some(diagnostic),
            }
        }
        Ok(stream) => {
            let tree = include_tree.then(|| build_tree(stream.tokens()));
            let mut result = None;
            let mut error = None;
            let mut diagnostic = None;
            if unroll {
                match ftpat_core::unroll(&stream) {
                    Ok(expansions) => {
                        result =
                            Some(expansions.iter().map(|e| ftpat_core::render(e)).collect())
                    }
                    Err(e) => {
                        diagnostic = Some(diagnostics::unroll_diagnostic(&e));
                        error = Some(e.to_string());
                    }
                }
            }
            PatternReport { pattern, lnum, cmd, tree, result, error, diagnostic }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_positional_file_and_flags() {
        let cli = Cli::parse_from(["ftpat", "-pu", "patterns.txt"]);
        assert_eq!(cli.file, "patterns.txt");
        assert!(cli.raw_patterns);
        assert!(cli.unroll);
        assert!(!cli.no_tree);
        assert!(!cli.no_json);
    }

    #[test]
    fn accepts_stdin_marker() {
        let cli = Cli::parse_from(["ftpat", "-"]);
        assert_eq!(cli.file, "-");
    }

    #[test]
    fn scan_mode_extracts_reports_for_each_rule() {
        let script = "autocmd BufNewFile,BufRead *.rs call Setup()\n";
        let reports = run(script.as_bytes(), false, true, true).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].pattern, "*.rs");
        assert_eq!(reports[0].lnum, Some(1));
        assert_eq!(reports[0].cmd.as_deref(), Some("call Setup()"));
        assert!(reports[0].tree.is_some());
        assert!(reports[0].result.is_some());
    }

    #[test]
    fn raw_mode_reads_one_pattern_per_line_with_no_lnum_or_cmd() {
        let reports = run("a{b,c}\n".as_bytes(), true, true, false).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].pattern, "a{b,c}");
        assert!(reports[0].lnum.is_none());
        assert!(reports[0].cmd.is_none());
        assert_eq!(
            reports[0].result.as_deref(),
            Some(["ab".to_string(), "ac".to_string()].as_slice())
        );
    }

    #[test]
    fn a_tokenize_failure_is_recorded_as_an_error_with_no_tree_or_result() {
        let reports = run("[\n".as_bytes(), true, true, true).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].error.is_some());
        assert!(reports[0].tree.is_none());
        assert!(reports[0].result.is_none());
        assert!(reports[0].diagnostic.is_some());
    }

    #[test]
    fn an_unroll_failure_keeps_the_tree_but_records_the_error() {
        let pattern = "{{{{{{{{{{a}}}}}}}}}}";
        let reports = run(format!("{pattern}\n").as_bytes(), true, true, true).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].error.is_some());
        assert!(reports[0].tree.is_some());
        assert!(reports[0].result.is_none());
    }
}
