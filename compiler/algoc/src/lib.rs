//! Driver for the algo pseudocode interpreter.
//!
//! # Pipeline
//!
//! ```text
//! source text
//!     │  algo_lexer::lex_source
//!     ▼
//! grouped tokens (one EndOfLine per line)
//!     │  algo_parse::parse_program
//!     ▼
//! Program (flat array of statement nodes)
//!     │  algo_eval::run_program
//!     ▼
//! console output
//! ```
//!
//! Every phase stops at its first error. [`AlgoError`] wraps the three phase
//! errors so callers can render any of them as a diagnostic.

pub mod commands;
mod config;

use std::fmt;
use std::sync::Once;

use algo_diagnostic::Diagnostic;
use algo_eval::{Console, EvalError};
use algo_ir::{Program, Token};
use algo_lexer::LexError;
use algo_parse::ParseError;

pub use config::{Command, Config, ConfigError, USAGE};

/// First error of a run, from whichever phase produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgoError {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl AlgoError {
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            AlgoError::Lex(err) => err.into_diagnostic(),
            AlgoError::Parse(err) => err.into_diagnostic(),
            AlgoError::Eval(err) => err.into_diagnostic(),
        }
    }
}

impl From<LexError> for AlgoError {
    fn from(err: LexError) -> Self {
        AlgoError::Lex(err)
    }
}

impl From<ParseError> for AlgoError {
    fn from(err: ParseError) -> Self {
        AlgoError::Parse(err)
    }
}

impl From<EvalError> for AlgoError {
    fn from(err: EvalError) -> Self {
        AlgoError::Eval(err)
    }
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgoError::Lex(err) => write!(f, "lex error: {err}"),
            AlgoError::Parse(err) => write!(f, "syntax error: {err}"),
            AlgoError::Eval(err) => write!(f, "runtime error: {err}"),
        }
    }
}

impl std::error::Error for AlgoError {}

/// Lex `source` into its file-level token stream.
pub fn lex_text(source: &str) -> Result<Vec<Token>, AlgoError> {
    Ok(algo_lexer::lex_source(source)?)
}

/// Lex and parse `source`.
pub fn parse_text(source: &str) -> Result<Program, AlgoError> {
    let tokens = lex_text(source)?;
    Ok(algo_parse::parse_program(&tokens)?)
}

/// Lex, parse and run `source` against `console`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_source(source: &str, console: &mut dyn Console) -> Result<(), AlgoError> {
    let program = parse_text(source)?;
    tracing::debug!(name = ?program.name, lines = program.len(), "program parsed");
    algo_eval::run_program(&program, console)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=algo_eval=debug`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let tree = HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(true);
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tree)
                .init();
        }
    });
}
