//! Error codes for all interpreter diagnostics.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates the category:
/// - E0xxx: Lexer errors
/// - E1xxx: Syntax errors
/// - E2xxx: Type errors
/// - E3xxx: Name errors
/// - E4xxx: Arity errors
/// - E6xxx: Runtime errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Closing delimiter without an opener
    E0002,
    /// Unclosed delimiter at end of line
    E0003,
    /// `[` not preceded by a variable
    E0004,
    /// Closing delimiter does not match the opener
    E0005,
    /// Integer literal out of range
    E0006,

    // Syntax Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Missing delimiter keyword (`alors`, `que`, `faire`, `à`)
    E1003,
    /// Invalid assignment target
    E1004,
    /// Invalid declaration
    E1005,
    /// Unknown type
    E1006,
    /// Invalid block end
    E1007,
    /// Invalid loop header
    E1008,
    /// Invalid program header
    E1009,

    // Type Errors (E2xxx)
    /// Assigned value does not match the declared type
    E2001,
    /// Operand types not supported by the operator
    E2002,
    /// Indexing a non-array or with a non-integer index
    E2003,

    // Name Errors (E3xxx)
    /// Undeclared variable
    E3001,
    /// Duplicate declaration
    E3002,
    /// Unknown function
    E3003,

    // Arity Errors (E4xxx)
    /// Wrong number of arguments
    E4001,

    // Runtime Errors (E6xxx)
    /// Index out of bounds
    E6001,
    /// Division by zero
    E6002,
    /// Integer overflow
    E6003,
    /// Input does not parse as the target type
    E6004,
    /// Input exhausted
    E6005,
    /// Block opener or closer without its counterpart
    E6006,
    /// Expression produced no value
    E6007,
    /// Console I/O failure
    E6008,
    /// Array dimension size is not a positive integer
    E6009,
    /// Loop end reached with an empty loop-return stack
    E6010,

    // Internal Errors (E9xxx)
    /// Node has no execution behavior
    E9001,
}

/// Error taxonomy seen by users.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    Lex,
    Syntax,
    Type,
    Name,
    Arity,
    Runtime,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Lex => "LexError",
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Name => "NameError",
            ErrorCategory::Arity => "ArityError",
            ErrorCategory::Runtime => "RuntimeError",
            ErrorCategory::Internal => "InternalError",
        };
        f.write_str(name)
    }
}

impl ErrorCode {
    /// All variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E4001,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
        ErrorCode::E6009,
        ErrorCode::E6010,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Category from the code's leading digit.
    pub fn category(&self) -> ErrorCategory {
        match self.as_str().as_bytes().get(1) {
            Some(b'0') => ErrorCategory::Lex,
            Some(b'1') => ErrorCategory::Syntax,
            Some(b'2') => ErrorCategory::Type,
            Some(b'3') => ErrorCategory::Name,
            Some(b'4') => ErrorCategory::Arity,
            Some(b'6') => ErrorCategory::Runtime,
            _ => ErrorCategory::Internal,
        }
    }

    /// Short description used by `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "closing delimiter without an opener",
            ErrorCode::E0003 => "unclosed delimiter",
            ErrorCode::E0004 => "index bracket not attached to a variable",
            ErrorCode::E0005 => "mismatched closing delimiter",
            ErrorCode::E0006 => "integer literal out of range",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "missing keyword",
            ErrorCode::E1004 => "invalid assignment target",
            ErrorCode::E1005 => "invalid declaration",
            ErrorCode::E1006 => "unknown type",
            ErrorCode::E1007 => "invalid block end",
            ErrorCode::E1008 => "invalid loop header",
            ErrorCode::E1009 => "invalid program header",
            ErrorCode::E2001 => "type mismatch",
            ErrorCode::E2002 => "unsupported operand types",
            ErrorCode::E2003 => "invalid indexing",
            ErrorCode::E3001 => "undeclared variable",
            ErrorCode::E3002 => "duplicate declaration",
            ErrorCode::E3003 => "unknown function",
            ErrorCode::E4001 => "wrong number of arguments",
            ErrorCode::E6001 => "index out of bounds",
            ErrorCode::E6002 => "division by zero",
            ErrorCode::E6003 => "integer overflow",
            ErrorCode::E6004 => "invalid input",
            ErrorCode::E6005 => "input exhausted",
            ErrorCode::E6006 => "unmatched block",
            ErrorCode::E6007 => "expression has no value",
            ErrorCode::E6008 => "console i/o failure",
            ErrorCode::E6009 => "invalid array size",
            ErrorCode::E6010 => "loop end without loop",
            ErrorCode::E9001 => "statement cannot be executed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_codes_are_distinct_and_well_formed() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert_eq!(s.len(), 5, "{s}");
            assert!(s.starts_with('E'));
            assert!(seen.insert(s), "duplicate {s}");
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn category_follows_leading_digit() {
        assert_eq!(ErrorCode::E0001.category(), ErrorCategory::Lex);
        assert_eq!(ErrorCode::E1003.category(), ErrorCategory::Syntax);
        assert_eq!(ErrorCode::E2001.category(), ErrorCategory::Type);
        assert_eq!(ErrorCode::E3002.category(), ErrorCategory::Name);
        assert_eq!(ErrorCode::E4001.category(), ErrorCategory::Arity);
        assert_eq!(ErrorCode::E6001.category(), ErrorCategory::Runtime);
        assert_eq!(ErrorCode::E9001.category(), ErrorCategory::Internal);
        assert_eq!(ErrorCategory::Type.to_string(), "TypeError");
    }
}
