//! Shared helpers for phase tests.

use algo_eval::BufferConsole;
use algoc::{run_source, AlgoError};

/// Run `source` with scripted `input`, returning the result and everything
/// printed before it ended.
pub fn run_with_input(source: &str, input: &[&str]) -> (Result<(), AlgoError>, String) {
    let mut console = BufferConsole::with_input(input.iter().copied());
    let result = run_source(source, &mut console);
    (result, console.output())
}

/// Run `source` without input; the run must succeed.
pub fn run_ok(source: &str) -> String {
    let (result, output) = run_with_input(source, &[]);
    if let Err(err) = result {
        panic!("run failed: {err}\noutput so far:\n{output}");
    }
    output
}

/// Run `source` without input; the run must fail.
pub fn run_err(source: &str) -> AlgoError {
    run_with_input(source, &[]).0.unwrap_err()
}

/// Wrap statements in a complete program with the given declarations.
pub fn program(declarations: &str, body: &str) -> String {
    format!("Algorithme Test\nVariables\n{declarations}\nDébut\n{body}\nFin\n")
}
