//! Diagnostics for every phase of the interpreter.
//!
//! Each phase reports failures through its own error type and converts it
//! into a [`Diagnostic`] at the boundary:
//! - an [`ErrorCode`] for searchability (first digit = phase)
//! - a message (what went wrong)
//! - a primary label (where it went wrong)
//! - optional notes and suggestions
//!
//! Rendering is the job of a [`emitter::DiagnosticEmitter`]; the CLI uses the
//! [`emitter::TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCategory, ErrorCode};
