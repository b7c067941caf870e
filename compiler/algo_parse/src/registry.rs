//! Parse capability registry.
//!
//! Each token variant that can head a node has one [`Parsable`]
//! implementation. [`parsable`] maps a token onto it; the builder never
//! inspects token variants itself. Delimiter keywords (`alors`, `que`,
//! `faire`, `à`, `de`), commas and type words have no entry: they are read
//! by the head that owns them.

use algo_ir::{Keyword, Node, Operator, Priority, Token, TokenData};

use crate::grammar::{
    Add, Assign, Call, Comparison, Connective, Declaration, Else, End, For, GroupExpr, If,
    Literal, Multiply, ProgramHeader, Section, Subtract, VariableRef, While,
};
use crate::{ParseCx, ParseResult};

/// Parse capability of a head token.
pub trait Parsable: Sync {
    fn priority(&self) -> Priority;

    /// Build the node headed by `head` from the tokens on either side of it.
    ///
    /// `Ok(None)` drops the line from the program.
    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>>;
}

static LITERAL: Literal = Literal;
static VARIABLE: VariableRef = VariableRef;
static CALL: Call = Call;
static GROUP: GroupExpr = GroupExpr;
static ADD: Add = Add;
static MULTIPLY: Multiply = Multiply;
static SUBTRACT: Subtract = Subtract;
static COMPARISON: Comparison = Comparison;
static CONNECTIVE: Connective = Connective;
static ASSIGN: Assign = Assign;
static DECLARATION: Declaration = Declaration;
static PROGRAM_HEADER: ProgramHeader = ProgramHeader;
static SECTION: Section = Section;
static IF: If = If;
static ELSE: Else = Else;
static WHILE: While = While;
static FOR: For = For;
static END: End = End;

/// Look up the parse rule for a token, if it can head a node.
pub fn parsable(data: &TokenData) -> Option<&'static dyn Parsable> {
    match data {
        TokenData::Number(_) | TokenData::String(_) | TokenData::Boolean(_) => Some(&LITERAL),
        TokenData::Variable(_) => Some(&VARIABLE),
        TokenData::Function(_) => Some(&CALL),
        TokenData::Group(_) => Some(&GROUP),
        TokenData::Operator(op) => match op {
            Operator::Plus => Some(&ADD),
            Operator::Star | Operator::Slash => Some(&MULTIPLY),
            Operator::Minus => Some(&SUBTRACT),
            Operator::Eq
            | Operator::NotEq
            | Operator::Lt
            | Operator::LtEq
            | Operator::Gt
            | Operator::GtEq => Some(&COMPARISON),
            Operator::Assign => Some(&ASSIGN),
            Operator::Colon => Some(&DECLARATION),
        },
        TokenData::BooleanOperator(_) => Some(&CONNECTIVE),
        TokenData::Keyword(kw) => match kw {
            Keyword::Algorithme => Some(&PROGRAM_HEADER),
            Keyword::Variables | Keyword::Debut => Some(&SECTION),
            Keyword::Si => Some(&IF),
            Keyword::Sinon => Some(&ELSE),
            Keyword::Tant => Some(&WHILE),
            Keyword::Pour => Some(&FOR),
            Keyword::Fin => Some(&END),
            Keyword::Alors | Keyword::Que | Keyword::Faire | Keyword::A | Keyword::De => None,
        },
        TokenData::Type(_)
        | TokenData::Separator(_)
        | TokenData::Parenthesis(_)
        | TokenData::EndOfLine => None,
    }
}

/// Priority of a token as seen by the head scan; `None` when it cannot
/// head a node.
pub fn priority_of(token: &Token) -> Option<Priority> {
    parsable(&token.data).map(|rule| rule.priority())
}
