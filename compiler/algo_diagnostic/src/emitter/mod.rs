//! Diagnostic emitters.
//!
//! Only a human-readable terminal emitter exists; other output formats plug
//! in by implementing [`DiagnosticEmitter`].

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}
