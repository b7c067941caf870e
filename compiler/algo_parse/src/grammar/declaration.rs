//! `<names> : <type>` declarations.
//!
//! The node is `(: <type> <var>...)`. The type child is a leaf for scalar
//! types (`chaîne de caractères` collapses onto one `chaîne` leaf) and
//! `(tableau <element>)` for arrays. Array variables carry their dimension
//! sizes as index groups: `t[3], m[2][4] : tableau de entier`.

use algo_ir::{Keyword, Node, Priority, Token, TokenData, TypeName};

use crate::context::{slice_span, split_commas};
use crate::grammar::variable_node;
use crate::registry::Parsable;
use crate::{ParseCx, ParseError, ParseErrorKind, ParseResult};

pub(crate) struct Declaration;

impl Parsable for Declaration {
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
        if left.is_empty() {
            return Err(invalid(head.span, "no variable names before `:`"));
        }
        let ty = type_descriptor(right, head)?;
        let is_array = ty.head.data == TokenData::Type(TypeName::Tableau);

        let mut children = vec![ty];
        for name in split_commas(left) {
            let var_node = match name {
                [token @ Token {
                    data: TokenData::Variable(var),
                    ..
                }] => {
                    if is_array && var.is_scalar() {
                        return Err(invalid(
                            token.span,
                            "array variables need their sizes, e.g. `t[10]`",
                        ));
                    }
                    if !is_array && !var.is_scalar() {
                        return Err(invalid(token.span, "only arrays take sizes"));
                    }
                    variable_node(token, var, cx)?
                }
                [] => return Err(invalid(slice_span(left, head.span), "empty variable name")),
                [first, ..] => return Err(ParseError::unexpected(first)),
            };
            children.push(var_node);
        }
        Ok(Some(Node::new(head.clone(), children)))
    }
}

fn invalid(span: algo_ir::Span, reason: &'static str) -> ParseError {
    ParseError::new(span, ParseErrorKind::InvalidDeclaration { reason })
}

/// Parse the type on the right of `:`.
fn type_descriptor(tokens: &[Token], colon: &Token) -> ParseResult<Node> {
    let Some(first) = tokens.first() else {
        return Err(invalid(colon.span, "missing type after `:`"));
    };
    let ty = match &first.data {
        TokenData::Type(ty) => *ty,
        TokenData::Variable(var) => {
            return Err(ParseError::new(
                first.span,
                ParseErrorKind::UnknownType {
                    name: var.name.clone(),
                },
            ))
        }
        _ => return Err(ParseError::unexpected(first)),
    };
    let rest = &tokens[1..];
    match (ty, rest) {
        (TypeName::Tableau, [de, element @ ..]) if de.is_keyword(Keyword::De) => {
            let element = type_descriptor(element, de)?;
            if element.head.data == TokenData::Type(TypeName::Tableau) {
                return Err(invalid(
                    element.span(),
                    "array elements must be a scalar type; give the outer array more sizes",
                ));
            }
            Ok(Node::new(first.clone(), vec![element]))
        }
        (TypeName::Tableau, _) => Err(invalid(first.span, "expected `tableau de <type>`")),
        (TypeName::Chaine, [de, chars]) if de.is_keyword(Keyword::De) => match chars.data {
            TokenData::Type(TypeName::Caractere) => Ok(Node::leaf(Token::new(
                first.data.clone(),
                first.span.merge(chars.span),
            ))),
            _ => Err(ParseError::unexpected(chars)),
        },
        (_, []) => Ok(Node::leaf(first.clone())),
        (_, [extra, ..]) => Err(ParseError::unexpected(extra)),
    }
}
