//! Execution engine for the algo pseudocode language.
//!
//! A parsed [`Program`](algo_ir::Program) is a flat array of statement
//! nodes. The [`Interpreter`] runs it with an instruction pointer: every
//! node head is dispatched to its [`Executable`] rule, and block statements
//! move the pointer instead of recursing into their bodies.
//!
//! Variables are statically declared with a [`DeclaredType`]; every write is
//! checked against it. Program I/O goes through a [`Console`], so the same
//! engine serves the terminal ([`StdConsole`]) and tests ([`BufferConsole`]).

mod builtins;
mod console;
mod environment;
pub mod errors;
mod exec;
mod interpreter;
mod operators;
mod value;

use algo_ir::Program;

pub use builtins::{builtin, Builtin};
pub use console::{BufferConsole, Console, StdConsole};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::{executable, Executable};
pub use interpreter::{Block, Interpreter};
pub use operators::{evaluate_binary, evaluate_connective, negate};
pub use value::{DeclaredType, ScalarType, Value, MAX_ARRAY_SLOTS};

/// Run `program` to completion against `console`.
pub fn run_program(program: &Program, console: &mut dyn Console) -> EvalResult<()> {
    Interpreter::new(program, console).run()
}
