//! Algo IR - shared data types for the interpreter pipeline.
//!
//! This crate contains the data that flows between phases:
//! - Spans for source locations
//! - Tokens (`Token`, `TokenData`, `TokenKind`) and their parse `Priority`
//! - Groups (`(...)` sub-expressions, call argument lists, `[...]` dimensions)
//! - AST `Node`s and the flat `Program` the engine walks
//!
//! No phase logic lives here. Behavior attached to a token (how it parses,
//! how it executes, how it rewrites the lexer's output) is provided by the
//! capability registries of `algo_lexer`, `algo_parse` and `algo_eval`.

mod node;
mod render;
mod span;
mod token;

pub use node::{Node, Program};
pub use render::visible_text;
pub use span::Span;
pub use token::{
    BoolOp, Bracket, FunctionCall, Group, GroupDelim, Keyword, Number, NumberLit, Operator,
    Priority, Separator, StrLit, Token, TokenData, TokenKind, TypeName, VarRef,
};
