//! Parse errors.

use std::fmt;

use algo_diagnostic::{Diagnostic, ErrorCode};
use algo_ir::{Keyword, Span};

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// An operand, condition or argument slot is empty.
    ExpectedExpression,
    /// A token that cannot appear where it was found.
    UnexpectedToken { found: String },
    /// A statement's delimiter keyword is absent (`Si ... alors`, `Tant que
    /// ... faire`, `Pour ... à ... faire`).
    MissingKeyword { construct: Keyword, keyword: Keyword },
    /// The left side of `←` is not a single variable.
    InvalidAssignmentTarget,
    InvalidDeclaration { reason: &'static str },
    UnknownType { name: String },
    /// `Fin` followed by something other than `si`, `tant` or `pour`.
    InvalidBlockEnd,
    InvalidLoopHeader { reason: &'static str },
    /// `Algorithme` not followed by exactly one name.
    InvalidProgramHeader,
}

impl ParseErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::MissingKeyword { .. } => ErrorCode::E1003,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1004,
            ParseErrorKind::InvalidDeclaration { .. } => ErrorCode::E1005,
            ParseErrorKind::UnknownType { .. } => ErrorCode::E1006,
            ParseErrorKind::InvalidBlockEnd => ErrorCode::E1007,
            ParseErrorKind::InvalidLoopHeader { .. } => ErrorCode::E1008,
            ParseErrorKind::InvalidProgramHeader => ErrorCode::E1009,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParseErrorKind::ExpectedExpression => "expression expected here",
            ParseErrorKind::UnexpectedToken { .. } => "unexpected",
            ParseErrorKind::MissingKeyword { .. } => "in this statement",
            ParseErrorKind::InvalidAssignmentTarget => "not a variable",
            ParseErrorKind::InvalidDeclaration { .. } => "in this declaration",
            ParseErrorKind::UnknownType { .. } => "unknown type",
            ParseErrorKind::InvalidBlockEnd => "cannot be closed",
            ParseErrorKind::InvalidLoopHeader { .. } => "in this loop",
            ParseErrorKind::InvalidProgramHeader => "expected `Algorithme <nom>`",
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            ParseErrorKind::MissingKeyword { keyword, .. } => {
                Some(format!("add `{}` to the end of the header", keyword.as_str()))
            }
            ParseErrorKind::InvalidBlockEnd => {
                Some("use `Fin si`, `Fin tant`, `Fin pour`, or `Fin` alone".to_string())
            }
            ParseErrorKind::UnknownType { .. } => Some(
                "known types: entier, réel, booléen, caractère, chaîne de caractères, tableau de <type>"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::ExpectedExpression => write!(f, "expected an expression"),
            ParseErrorKind::UnexpectedToken { found } => write!(f, "unexpected `{found}`"),
            ParseErrorKind::MissingKeyword { construct, keyword } => write!(
                f,
                "`{}` statement is missing `{}`",
                construct.as_str(),
                keyword.as_str()
            ),
            ParseErrorKind::InvalidAssignmentTarget => {
                write!(f, "only a single variable can be assigned")
            }
            ParseErrorKind::InvalidDeclaration { reason } => {
                write!(f, "invalid declaration: {reason}")
            }
            ParseErrorKind::UnknownType { name } => write!(f, "unknown type `{name}`"),
            ParseErrorKind::InvalidBlockEnd => write!(f, "invalid block end"),
            ParseErrorKind::InvalidLoopHeader { reason } => {
                write!(f, "invalid `Pour` header: {reason}")
            }
            ParseErrorKind::InvalidProgramHeader => write!(f, "invalid program header"),
        }
    }
}

impl ParseError {
    #[cold]
    pub fn new(span: Span, kind: ParseErrorKind) -> Self {
        ParseError { span, kind }
    }

    #[cold]
    pub fn expected_expression(span: Span) -> Self {
        Self::new(span, ParseErrorKind::ExpectedExpression)
    }

    #[cold]
    pub fn unexpected(token: &algo_ir::Token) -> Self {
        Self::new(
            token.span,
            ParseErrorKind::UnexpectedToken {
                found: token.to_string(),
            },
        )
    }

    #[cold]
    pub fn missing_keyword(span: Span, construct: Keyword, keyword: Keyword) -> Self {
        Self::new(span, ParseErrorKind::MissingKeyword { construct, keyword })
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.label());
        match self.kind.hint() {
            Some(hint) => diag.with_suggestion(hint),
            None => diag,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for ParseError {}
