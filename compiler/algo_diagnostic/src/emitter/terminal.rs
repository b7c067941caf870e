//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. When
//! the source text is attached, each label is rendered with its location,
//! the offending source line and a caret underline:
//!
//! ```text
//! error[E2001]: type mismatch: `x` is declared `entier`, found `chaîne`
//!   --> prog.algo:6:5
//!    |
//!  6 | x ← "abc"
//!    |     ^^^^^ expected `entier`
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is used for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source file so labels render as `path:line:col` with a
    /// snippet. Without it, labels fall back to raw byte spans.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceFile {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Note => colors::NOTE,
            Severity::Help => colors::HELP,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    fn emit_label(&mut self, label: &Label) {
        let Some(source) = self.source.take() else {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, Self::label_color(label));
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source
            .lines
            .offset_to_line_col(&source.text, label.span.start);
        let text = source.lines.line_text(&source.text, line).unwrap_or("");
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);

        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(
            self.writer,
            "{pad}{marker} {}:{line}:{col}",
            source.path
        );
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {text}");

        // Underline stays on the first line of a multi-line span.
        let line_end = source
            .lines
            .line_start_offset(line)
            .map_or(0, |start| start as usize + text.len());
        let end = (label.span.end as usize).min(line_end);
        let width = source
            .text
            .get(label.span.start as usize..end)
            .map_or(0, |s| s.chars().count())
            .max(1);
        let indent = " ".repeat(col as usize - 1);
        let carets = if label.is_primary { "^" } else { "-" }.repeat(width);
        let _ = write!(self.writer, "{pad} | {indent}");
        self.write_colored(&carets, Self::label_color(label));
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, Self::label_color(label));
        }
        let _ = writeln!(self.writer);

        self.source = Some(source);
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.emit_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_severity(Severity::Note);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_severity(Severity::Help);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
