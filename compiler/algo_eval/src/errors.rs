//! Runtime errors.
//!
//! `EvalErrorKind` carries the structured data of each failure and decides
//! its error code; constructor functions below are the entry points used by
//! the engine.

use std::fmt;

use algo_diagnostic::{Diagnostic, ErrorCode};
use algo_ir::Span;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Type
    TypeMismatch {
        expected: String,
        got: String,
    },
    BinaryTypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    UnaryTypeMismatch {
        op: &'static str,
        operand: &'static str,
    },
    InvalidIndexType {
        got: &'static str,
    },
    NotAnArray {
        name: String,
    },
    InvalidArrayShape {
        name: String,
        rank: usize,
        got: usize,
    },

    // Name
    UndeclaredVariable {
        name: String,
    },
    DuplicateDeclaration {
        name: String,
        first: Option<Span>,
    },
    UnknownFunction {
        name: String,
    },

    // Arity
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    // Runtime
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    InvalidInput {
        input: String,
        expected: &'static str,
    },
    InputExhausted,
    UnmatchedBlock {
        construct: &'static str,
    },
    NoValue {
        what: String,
    },
    InvalidArraySize {
        size: i64,
    },
    ArrayTooLarge {
        limit: usize,
    },
    LoopStackEmpty,
    Io {
        message: String,
    },

    // Internal
    NotExecutable {
        what: String,
    },
}

impl EvalErrorKind {
    /// Extra explanation rendered under the diagnostic.
    fn note(&self) -> Option<&'static str> {
        match self {
            Self::TypeMismatch { .. } => {
                Some("values are never converted implicitly, not even entier to réel")
            }
            Self::ArrayTooLarge { .. } => {
                Some("the slot count is the product of every dimension's size")
            }
            Self::IndexOutOfBounds { .. } => Some("array indices start at 1"),
            _ => None,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::TypeMismatch { .. } => ErrorCode::E2001,
            Self::BinaryTypeMismatch { .. } | Self::UnaryTypeMismatch { .. } => ErrorCode::E2002,
            Self::InvalidIndexType { .. }
            | Self::NotAnArray { .. }
            | Self::InvalidArrayShape { .. } => ErrorCode::E2003,
            Self::UndeclaredVariable { .. } => ErrorCode::E3001,
            Self::DuplicateDeclaration { .. } => ErrorCode::E3002,
            Self::UnknownFunction { .. } => ErrorCode::E3003,
            Self::ArityMismatch { .. } => ErrorCode::E4001,
            Self::IndexOutOfBounds { .. } => ErrorCode::E6001,
            Self::DivisionByZero => ErrorCode::E6002,
            Self::IntegerOverflow { .. } => ErrorCode::E6003,
            Self::InvalidInput { .. } => ErrorCode::E6004,
            Self::InputExhausted => ErrorCode::E6005,
            Self::UnmatchedBlock { .. } => ErrorCode::E6006,
            Self::NoValue { .. } => ErrorCode::E6007,
            Self::Io { .. } => ErrorCode::E6008,
            Self::InvalidArraySize { .. } | Self::ArrayTooLarge { .. } => ErrorCode::E6009,
            Self::LoopStackEmpty => ErrorCode::E6010,
            Self::NotExecutable { .. } => ErrorCode::E9001,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::BinaryTypeMismatch { op, left, right } => {
                write!(f, "operator `{op}` cannot be applied to {left} and {right}")
            }
            Self::UnaryTypeMismatch { op, operand } => {
                write!(f, "operator `{op}` cannot be applied to {operand}")
            }
            Self::InvalidIndexType { got } => write!(f, "index must be entier, got {got}"),
            Self::NotAnArray { name } => write!(f, "`{name}` is not an array"),
            Self::InvalidArrayShape { name, rank, got } => write!(
                f,
                "`{name}` has {rank} dimension(s) but {got} index(es) were given"
            ),
            Self::UndeclaredVariable { name } => write!(f, "undeclared variable `{name}`"),
            Self::DuplicateDeclaration { name, .. } => {
                write!(f, "variable `{name}` is already declared")
            }
            Self::UnknownFunction { name } => write!(f, "unknown function `{name}`"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "`{name}` expects {expected} {arg_word}, got {got}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds 1..={len}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::InvalidInput { input, expected } => {
                write!(f, "cannot read `{input}` as {expected}")
            }
            Self::InputExhausted => write!(f, "no more input to read"),
            Self::UnmatchedBlock { construct } => {
                write!(f, "no matching end for `{construct}`")
            }
            Self::NoValue { what } => write!(f, "`{what}` does not produce a value"),
            Self::InvalidArraySize { size } => {
                write!(f, "array size must be at least 1, got {size}")
            }
            Self::ArrayTooLarge { limit } => {
                write!(f, "array has more than {limit} slots")
            }
            Self::LoopStackEmpty => write!(f, "loop end reached outside of a loop"),
            Self::Io { message } => write!(f, "console error: {message}"),
            Self::NotExecutable { what } => write!(f, "`{what}` is not a statement"),
        }
    }
}

/// A runtime error, optionally located.
///
/// Errors raised deep inside expression evaluation may have no span; the
/// engine fills in the executing statement's span before returning them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let code = self.kind.error_code();
        let mut diag = Diagnostic::error(code).with_message(self.kind.to_string());
        if let Some(span) = self.span {
            diag = diag.with_label(span, code.description());
        }
        if let EvalErrorKind::DuplicateDeclaration {
            first: Some(first), ..
        } = self.kind
        {
            diag = diag.with_secondary_label(first, "first declared here");
        }
        match self.kind.note() {
            Some(note) => diag.with_note(note),
            None => diag,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} at {span}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {}

// Constructors

#[cold]
pub fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        expected: expected.into(),
        got: got.into(),
    })
}

#[cold]
pub fn binary_type_mismatch(op: &'static str, left: &'static str, right: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

#[cold]
pub fn unary_type_mismatch(op: &'static str, operand: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::UnaryTypeMismatch { op, operand })
}

#[cold]
pub fn undeclared_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndeclaredVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_declaration(name: &str, first: Option<Span>) -> EvalError {
    EvalError::new(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
        first,
    })
}

#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UnknownFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::new(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn unmatched_block(construct: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::UnmatchedBlock { construct })
}

#[cold]
pub fn no_value(what: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::NoValue { what: what.into() })
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::new(EvalErrorKind::Io {
            message: err.to_string(),
        })
    }
}
