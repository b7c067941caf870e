//! AST nodes and the flat program array.

use std::fmt;

use crate::{Span, Token, TokenData};

/// One AST node: a head token and its parsed children.
///
/// The meaning of `children` is decided by the head's parse capability.
/// For statement heads it is a fixed layout (e.g. `←` has `[target, value]`);
/// for operators it is `[lhs, rhs]`; for a call it is one subtree per
/// argument; for a variable it is one subtree per index dimension.
#[derive(Clone, PartialEq, Debug)]
pub struct Node {
    pub head: Token,
    pub children: Vec<Node>,
}

impl Node {
    #[inline]
    pub fn leaf(head: Token) -> Self {
        Node {
            head,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn new(head: Token, children: Vec<Node>) -> Self {
        Node { head, children }
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.head.span
    }

    /// Span of the head and all descendants.
    pub fn full_span(&self) -> Span {
        self.children
            .iter()
            .fold(self.head.span, |acc, child| acc.merge(child.full_span()))
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            return match &self.head.data {
                TokenData::Function(call) => write!(f, "({}())", call.name),
                _ => write!(f, "{}", self.head),
            };
        }
        match &self.head.data {
            TokenData::Function(call) => write!(f, "({}()", call.name)?,
            TokenData::Variable(var) => write!(f, "({}[]", var.name)?,
            _ => write!(f, "({}", self.head)?,
        }
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}

/// The executable form of a source file: one node per line that carries
/// semantic content, in source order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Program {
    /// Name from the `Algorithme <name>` header, if present.
    pub name: Option<String>,
    pub nodes: Vec<Node>,
}

impl Program {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, ip: usize) -> Option<&Node> {
        self.nodes.get(ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Number, NumberLit, Operator, VarRef};
    use pretty_assertions::assert_eq;

    fn int(n: i64, at: u32) -> Node {
        Node::leaf(Token::new(
            TokenData::Number(Number {
                text: n.to_string(),
                value: NumberLit::Int(n),
            }),
            Span::new(at, at + 1),
        ))
    }

    #[test]
    fn display_is_s_expression() {
        let sum = Node::new(
            Token::new(TokenData::Operator(Operator::Plus), Span::new(6, 7)),
            vec![int(1, 4), int(2, 8)],
        );
        let assign = Node::new(
            Token::new(TokenData::Operator(Operator::Assign), Span::new(2, 3)),
            vec![
                Node::leaf(Token::new(
                    TokenData::Variable(VarRef::scalar("x")),
                    Span::new(0, 1),
                )),
                sum,
            ],
        );
        assert_eq!(assign.to_string(), "(← x (+ 1 2))");
        assert_eq!(assign.full_span(), Span::new(0, 9));
    }
}
