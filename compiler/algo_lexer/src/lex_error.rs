//! Lexer errors.

use std::fmt;

use algo_diagnostic::{Diagnostic, ErrorCode};
use algo_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A quote opened on this line was never closed.
    UnterminatedString { quote: char },
    /// `(` or `[` still open at end of line.
    UnclosedDelimiter { open: char },
    /// `)` or `]` with nothing open.
    UnexpectedClosingDelimiter { found: char },
    /// `)` closing a `[`, or `]` closing a `(`.
    MismatchedDelimiter { open: char, found: char },
    /// `[` not directly after a variable.
    IndexWithoutVariable,
    /// Digit sequence that does not fit in a 64-bit integer.
    IntegerOutOfRange,
}

impl LexError {
    #[cold]
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString { .. } => ErrorCode::E0001,
            LexErrorKind::UnexpectedClosingDelimiter { .. } => ErrorCode::E0002,
            LexErrorKind::UnclosedDelimiter { .. } => ErrorCode::E0003,
            LexErrorKind::IndexWithoutVariable => ErrorCode::E0004,
            LexErrorKind::MismatchedDelimiter { .. } => ErrorCode::E0005,
            LexErrorKind::IntegerOutOfRange => ErrorCode::E0006,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let label = match &self.kind {
            LexErrorKind::UnterminatedString { .. } => "string starts here",
            LexErrorKind::UnclosedDelimiter { .. } => "opened here",
            LexErrorKind::UnexpectedClosingDelimiter { .. }
            | LexErrorKind::MismatchedDelimiter { .. } => "unexpected delimiter",
            LexErrorKind::IndexWithoutVariable => "index needs a variable before it",
            LexErrorKind::IntegerOutOfRange => "out of range",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::UnterminatedString { quote } => {
                diag.with_suggestion(format!("close the string with `{quote}` on the same line"))
            }
            _ => diag,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString { quote } => {
                write!(f, "unterminated string literal (missing closing `{quote}`)")
            }
            LexErrorKind::UnclosedDelimiter { open } => write!(f, "unclosed delimiter `{open}`"),
            LexErrorKind::UnexpectedClosingDelimiter { found } => {
                write!(f, "unexpected closing delimiter `{found}`")
            }
            LexErrorKind::MismatchedDelimiter { open, found } => {
                write!(f, "mismatched closing delimiter `{found}` for `{open}`")
            }
            LexErrorKind::IndexWithoutVariable => {
                write!(f, "`[` must directly follow a variable name")
            }
            LexErrorKind::IntegerOutOfRange => write!(f, "integer literal is too large"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}
