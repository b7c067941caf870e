//! Execution capability registry.
//!
//! Mirrors the parser's registry: each head token that can be executed maps
//! to one [`Executable`]. Literals and variables are not here; the
//! interpreter resolves them directly when it needs their value.

mod control;
mod expr;
mod statement;

use algo_ir::{Keyword, Node, Operator, TokenData};

use crate::errors::{EvalError, EvalErrorKind, EvalResult};
use crate::interpreter::Interpreter;

use control::{Else, End, For, If, While};
use expr::{Arithmetic, Call, Comparison, Connective};
use statement::{Assign, Declare};

/// Execution capability of a node head.
///
/// Expression nodes push their result with [`Interpreter::push`];
/// statements act on the environment, the console or the instruction
/// pointer.
pub trait Executable: Sync {
    fn execute(&self, node: &Node, interp: &mut Interpreter<'_>) -> EvalResult<()>;
}

static ARITHMETIC: Arithmetic = Arithmetic;
static COMPARISON: Comparison = Comparison;
static CONNECTIVE: Connective = Connective;
static CALL: Call = Call;
static ASSIGN: Assign = Assign;
static DECLARE: Declare = Declare;
static IF: If = If;
static ELSE: Else = Else;
static WHILE: While = While;
static FOR: For = For;
static END: End = End;

/// Look up the execution rule for a node head.
pub fn executable(data: &TokenData) -> Option<&'static dyn Executable> {
    match data {
        TokenData::Operator(op) => match op {
            Operator::Plus | Operator::Minus | Operator::Star | Operator::Slash => {
                Some(&ARITHMETIC)
            }
            Operator::Eq
            | Operator::NotEq
            | Operator::Lt
            | Operator::LtEq
            | Operator::Gt
            | Operator::GtEq => Some(&COMPARISON),
            Operator::Assign => Some(&ASSIGN),
            Operator::Colon => Some(&DECLARE),
        },
        TokenData::BooleanOperator(_) => Some(&CONNECTIVE),
        TokenData::Function(_) => Some(&CALL),
        TokenData::Keyword(kw) => match kw {
            Keyword::Si => Some(&IF),
            Keyword::Sinon => Some(&ELSE),
            Keyword::Tant => Some(&WHILE),
            Keyword::Pour => Some(&FOR),
            Keyword::Fin => Some(&END),
            _ => None,
        },
        _ => None,
    }
}

/// A node whose children do not have the layout its head expects.
#[cold]
pub(crate) fn malformed(node: &Node) -> EvalError {
    EvalError::new(EvalErrorKind::NotExecutable {
        what: node.to_string(),
    })
    .with_span(node.span())
}
