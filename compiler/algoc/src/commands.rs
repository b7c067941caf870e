//! Command handlers for the `algo` binary.
//!
//! Each handler reads the source file, runs its phases, renders the first
//! error as a diagnostic on stderr and returns the process exit code.

use std::io::{IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use algo_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use algo_diagnostic::span_utils::line_number;
use algo_eval::StdConsole;

use crate::{lex_text, parse_text, run_source, AlgoError, Command, Config};

/// Dispatch on the configured command.
pub fn execute(config: &Config) -> ExitCode {
    match config.command {
        Command::Run => run_file(&config.path, config.color),
        Command::Lex => lex_file(&config.path, config.color),
        Command::Parse => parse_file(&config.path, config.color),
    }
}

/// Read a source file, describing failures the way users see them.
pub fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|err| {
        let path = path.display();
        match err.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {err}"),
        }
    })
}

fn report(err: AlgoError, path: &Path, source: &str, color: ColorMode) -> ExitCode {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty)
        .with_source(path.display().to_string(), source);
    emitter.emit(&err.into_diagnostic());
    emitter.flush();
    ExitCode::FAILURE
}

fn with_source(path: &Path, run: impl FnOnce(&str) -> ExitCode) -> ExitCode {
    match read_file(path) {
        Ok(source) => run(&source),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Interpret a program on the process console.
pub fn run_file(path: &Path, color: ColorMode) -> ExitCode {
    with_source(path, |source| {
        eprintln!("Interpreting {}...", path.display());
        match run_source(source, &mut StdConsole) {
            Ok(()) => {
                eprintln!("Interpreting finished.");
                ExitCode::SUCCESS
            }
            Err(err) => report(err, path, source, color),
        }
    })
}

/// Print the grouped tokens of each source line.
pub fn lex_file(path: &Path, color: ColorMode) -> ExitCode {
    with_source(path, |source| match lex_text(source) {
        Ok(tokens) => {
            let mut out = std::io::stdout().lock();
            for line in algo_lexer::split_lines(&tokens) {
                let Some(first) = line.first() else {
                    continue;
                };
                let words: Vec<String> = line.iter().map(ToString::to_string).collect();
                let _ = writeln!(
                    out,
                    "{:>4} | {}",
                    line_number(source, first.span),
                    words.join("  ")
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => report(err, path, source, color),
    })
}

/// Print the program name and the node of every kept line.
pub fn parse_file(path: &Path, color: ColorMode) -> ExitCode {
    with_source(path, |source| match parse_text(source) {
        Ok(program) => {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(
                out,
                "Algorithme {}",
                program.name.as_deref().unwrap_or("(sans nom)")
            );
            for (ip, node) in program.nodes.iter().enumerate() {
                let _ = writeln!(out, "{ip:>4}  {node}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => report(err, path, source, color),
    })
}
