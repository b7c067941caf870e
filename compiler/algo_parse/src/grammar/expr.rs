//! Expression heads: literals, variables, calls, groups, operators and
//! assignment.

use algo_ir::{Node, Priority, Token, TokenData, VarRef};

use crate::context::{expect_empty, expression, group_contents, slice_span, split_commas};
use crate::registry::Parsable;
use crate::{ParseCx, ParseError, ParseErrorKind, ParseResult};

/// Number, string and boolean literals.
pub(crate) struct Literal;

pub(crate) struct VariableRef;

/// Function call; one child per comma-separated argument.
pub(crate) struct Call;

/// Parenthesized sub-expression.
pub(crate) struct GroupExpr;

/// `+`.
pub(crate) struct Add;

/// `*`, `/`.
pub(crate) struct Multiply;

/// `-`: binary, or negation when nothing stands on its left.
pub(crate) struct Subtract;

/// `=`, `<>`, `<`, `<=`, `>`, `>=`.
pub(crate) struct Comparison;

/// `ET`, `OU`.
pub(crate) struct Connective;

/// `←`.
pub(crate) struct Assign;

/// Node for a variable reference: one child per index dimension.
pub(crate) fn variable_node(token: &Token, var: &VarRef, cx: &mut ParseCx) -> ParseResult<Node> {
    let dims = var
        .dims
        .iter()
        .map(|dim| group_contents(dim, cx))
        .collect::<ParseResult<Vec<_>>>()?;
    Ok(Node::new(token.clone(), dims))
}

fn binary(head: &Token, left: &[Token], right: &[Token], cx: &mut ParseCx) -> ParseResult<Node> {
    let lhs = expression(left, head.span, cx)?;
    let rhs = expression(right, head.span, cx)?;
    Ok(Node::new(head.clone(), vec![lhs, rhs]))
}

impl Parsable for Literal {
    fn priority(&self) -> Priority {
        Priority::Lowest
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        _cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        expect_empty(left)?;
        expect_empty(right)?;
        Ok(Some(Node::leaf(head.clone())))
    }
}

impl Parsable for VariableRef {
    fn priority(&self) -> Priority {
        Priority::Lowest
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        expect_empty(left)?;
        expect_empty(right)?;
        match &head.data {
            TokenData::Variable(var) => variable_node(head, var, cx).map(Some),
            _ => Err(ParseError::unexpected(head)),
        }
    }
}

impl Parsable for Call {
    fn priority(&self) -> Priority {
        Priority::Lowest
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        expect_empty(left)?;
        expect_empty(right)?;
        let TokenData::Function(call) = &head.data else {
            return Err(ParseError::unexpected(head));
        };
        let args = split_commas(&call.args.tokens)
            .into_iter()
            .map(|arg| expression(arg, call.args.span, cx))
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Some(Node::new(head.clone(), args)))
    }
}

impl Parsable for GroupExpr {
    fn priority(&self) -> Priority {
        Priority::Lowest
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        expect_empty(left)?;
        expect_empty(right)?;
        match &head.data {
            TokenData::Group(group) => group_contents(group, cx).map(Some),
            _ => Err(ParseError::unexpected(head)),
        }
    }
}

impl Parsable for Add {
    fn priority(&self) -> Priority {
        Priority::Additive
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        binary(head, left, right, cx).map(Some)
    }
}

impl Parsable for Multiply {
    fn priority(&self) -> Priority {
        Priority::Multiplicative
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        binary(head, left, right, cx).map(Some)
    }
}

impl Parsable for Subtract {
    fn priority(&self) -> Priority {
        Priority::Additive
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        if left.is_empty() {
            let operand = expression(right, head.span, cx)?;
            return Ok(Some(Node::new(head.clone(), vec![operand])));
        }
        binary(head, left, right, cx).map(Some)
    }
}

impl Parsable for Comparison {
    fn priority(&self) -> Priority {
        Priority::Connective
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        binary(head, left, right, cx).map(Some)
    }
}

impl Parsable for Connective {
    fn priority(&self) -> Priority {
        Priority::Connective
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        binary(head, left, right, cx).map(Some)
    }
}

impl Parsable for Assign {
    fn priority(&self) -> Priority {
        Priority::Statement
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        let target = match left {
            [token @ Token {
                data: TokenData::Variable(var),
                ..
            }] => variable_node(token, var, cx)?,
            _ => {
                return Err(ParseError::new(
                    slice_span(left, head.span),
                    ParseErrorKind::InvalidAssignmentTarget,
                ))
            }
        };
        let value = expression(right, head.span, cx)?;
        Ok(Some(Node::new(head.clone(), vec![target, value])))
    }
}
