//! Parse context and the priority-driven node builder.

use algo_ir::{Group, Node, Priority, Span, Token, TokenData};
use algo_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::registry::{parsable, Parsable};
use crate::{ParseError, ParseResult};

/// State shared by every head parsed from one program.
#[derive(Debug, Default)]
pub struct ParseCx {
    program_name: Option<String>,
}

impl ParseCx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    pub(crate) fn set_program_name(&mut self, name: String) {
        self.program_name = Some(name);
    }

    pub(crate) fn into_program_name(self) -> Option<String> {
        self.program_name
    }
}

/// Build the node rooted at the highest-priority token of `tokens`.
///
/// A lone group stands for its contents. Otherwise the strictly highest
/// priority token wins, the leftmost one on ties, and its [`Parsable`]
/// decides what its left and right slices mean. Returns `None` for lines
/// that carry no executable content (headers and section markers) and for
/// an empty slice.
pub fn build_node(tokens: &[Token], cx: &mut ParseCx) -> ParseResult<Option<Node>> {
    ensure_sufficient_stack(|| build_node_inner(tokens, cx))
}

fn build_node_inner(tokens: &[Token], cx: &mut ParseCx) -> ParseResult<Option<Node>> {
    if let [Token {
        data: TokenData::Group(group),
        ..
    }] = tokens
    {
        return group_contents(group, cx).map(Some);
    }
    let Some((index, rule)) = select_head(tokens) else {
        return match tokens.first() {
            Some(token) => Err(ParseError::unexpected(token)),
            None => Ok(None),
        };
    };
    let head = &tokens[index];
    trace!(head = %head, priority = ?rule.priority(), index, "head selected");
    rule.parse(head, &tokens[..index], &tokens[index + 1..], cx)
}

/// Index and parse rule of the head token: strictly highest priority,
/// leftmost on ties. Tokens without a parse rule never head a node.
pub(crate) fn select_head(tokens: &[Token]) -> Option<(usize, &'static dyn Parsable)> {
    let mut best: Option<(usize, &'static dyn Parsable, Priority)> = None;
    for (i, token) in tokens.iter().enumerate() {
        let Some(rule) = parsable(&token.data) else {
            continue;
        };
        let priority = rule.priority();
        if best.as_ref().map_or(true, |&(_, _, p)| priority > p) {
            best = Some((i, rule, priority));
        }
    }
    best.map(|(i, rule, _)| (i, rule))
}

/// Parse a slice that must produce a value. `at` locates the error when the
/// slice is empty.
pub(crate) fn expression(tokens: &[Token], at: Span, cx: &mut ParseCx) -> ParseResult<Node> {
    match tokens.first() {
        None => Err(ParseError::expected_expression(at)),
        Some(first) => build_node(tokens, cx)?.ok_or_else(|| ParseError::unexpected(first)),
    }
}

pub(crate) fn group_contents(group: &Group, cx: &mut ParseCx) -> ParseResult<Node> {
    expression(&group.tokens, group.span, cx)
}

/// Split on top-level commas. An empty input yields no parts; an empty part
/// between commas is kept so callers can report it.
pub(crate) fn split_commas(tokens: &[Token]) -> Vec<&[Token]> {
    if tokens.is_empty() {
        return Vec::new();
    }
    tokens.split(Token::is_comma).collect()
}

/// Span covering every token of a non-empty slice, or `fallback`.
pub(crate) fn slice_span(tokens: &[Token], fallback: Span) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => fallback,
    }
}

/// Fail on the first token of a slice that must be empty.
pub(crate) fn expect_empty(tokens: &[Token]) -> ParseResult<()> {
    match tokens.first() {
        Some(token) => Err(ParseError::unexpected(token)),
        None => Ok(()),
    }
}
