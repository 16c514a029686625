//! CLI module for the minic front end.
//!
//! ## Commands
//!
//! - `tokens <file>` - Scan a file and print its token stream
//! - `parse <file>` - Parse a file and print its syntax tree
//! - `check <file>` - Run both phases (default action when no subcommand given)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use minic_syntax::diagnostics;
use minic_syntax::{lexer, parser};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The minic front end
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(version = VERSION)]
#[command(about = "Front end for a small C-like language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a file and print its token stream
    Tokens {
        /// Source file to scan
        file: PathBuf,
    },
    /// Parse a file and print its syntax tree
    Parse {
        /// Source file to parse
        file: PathBuf,
    },
    /// Run the lexer phase then the parser phase, printing both
    Check {
        /// Source file to check
        file: PathBuf,
    },
}

// ============================================================================
// Entry point
// ============================================================================

/// Parse arguments, dispatch, and exit with the command's code.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Tokens { file }) => cmd_tokens(&file),
        Some(Command::Parse { file }) => cmd_parse(&file),
        Some(Command::Check { file }) => cmd_check(&file),
        None => match cli.file {
            Some(file) => cmd_check(&file),
            None => Err(CliError::failure("No input file. Try: minic <FILE>")),
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e.message);
        process::exit(e.exit_code.0);
    }
}

// ============================================================================
// Commands
// ============================================================================

fn read_source(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Cannot read {}: {}", path.display(), e)))
}

fn cmd_tokens(path: &Path) -> CliResult<()> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source);
    tracing::debug!(count = tokens.len(), "scanned token stream");
    print!("{}", render::token_stream(&tokens));
    Ok(())
}

fn cmd_parse(path: &Path) -> CliResult<()> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source);
    match parser::parse(&tokens) {
        Ok(tree) => {
            print!("{}", render::tree(&tree));
            Ok(())
        }
        Err(e) => Err(CliError::failure(render_diagnostic(path, &source, &e))),
    }
}

/// Both phases, in the classic driver order: token dump, then tree dump.
fn cmd_check(path: &Path) -> CliResult<()> {
    let source = read_source(path)?;

    let tokens = lexer::lex(&source);
    println!("-------------------- Lexer phase --------------------");
    print!("{}", render::token_stream(&tokens));

    match parser::parse(&tokens) {
        Ok(tree) => {
            println!();
            println!("-------------------- Parser phase --------------------");
            print!("{}", render::tree(&tree));
            Ok(())
        }
        Err(e) => Err(CliError::failure(render_diagnostic(path, &source, &e))),
    }
}

fn render_diagnostic(path: &Path, source: &str, error: &diagnostics::SyntaxError) -> String {
    diagnostics::render(&path.display().to_string(), source, error)
}
