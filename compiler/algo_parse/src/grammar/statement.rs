//! Statement heads: program header, section markers and block keywords.
//!
//! Block statements keep only their header on their line; bodies are the
//! program lines that follow, up to the matching `Fin`:
//!
//! | Line                               | Node                               |
//! |------------------------------------|------------------------------------|
//! | `Si <cond> alors`                  | `(Si <cond>)`                      |
//! | `Sinon`                            | `Sinon`                            |
//! | `Tant que <cond> faire`            | `(Tant <cond>)`                    |
//! | `Pour <i> ← <start> à <end> faire` | `(Pour <i> (← <i> <start>) <end>)` |
//! | `Fin si`, `Fin tant`, `Fin pour`   | `(Fin si)`, `(Fin tant)`, ...      |
//! | `Fin`                              | `Fin` (stop)                       |

use algo_ir::{Keyword, Node, Operator, Priority, Token, TokenData};

use crate::context::{build_node, expect_empty, expression, slice_span};
use crate::registry::Parsable;
use crate::{ParseCx, ParseError, ParseErrorKind, ParseResult};

/// `Algorithme <name>`.
pub(crate) struct ProgramHeader;

/// `Variables` and `Début`.
pub(crate) struct Section;

pub(crate) struct If;

pub(crate) struct Else;

pub(crate) struct While;

pub(crate) struct For;

pub(crate) struct End;

fn closes_block(token: &Token) -> bool {
    matches!(
        token.keyword(),
        Some(Keyword::Si | Keyword::Tant | Keyword::Pour)
    )
}

fn find_keyword(tokens: &[Token], kw: Keyword) -> Option<usize> {
    tokens.iter().position(|t| t.is_keyword(kw))
}

/// Split `tokens` at the first `kw`, failing with a missing-keyword error
/// attributed to `construct` at `at`.
fn split_at_keyword<'t>(
    tokens: &'t [Token],
    construct: Keyword,
    kw: Keyword,
    at: algo_ir::Span,
) -> ParseResult<(&'t [Token], &'t Token, &'t [Token])> {
    let index = find_keyword(tokens, kw).ok_or_else(|| {
        ParseError::missing_keyword(slice_span(tokens, at).merge(at), construct, kw)
    })?;
    Ok((&tokens[..index], &tokens[index], &tokens[index + 1..]))
}

impl Parsable for ProgramHeader {
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
        expect_empty(left)?;
        match right {
            [Token {
                data: TokenData::Variable(var),
                ..
            }] if var.is_scalar() => {
                cx.set_program_name(var.name.clone());
                Ok(None)
            }
            _ => Err(ParseError::new(
                slice_span(right, head.span).merge(head.span),
                ParseErrorKind::InvalidProgramHeader,
            )),
        }
    }
}

impl Parsable for Section {
    fn priority(&self) -> Priority {
        Priority::Statement
    }

    fn parse(
        &self,
        _head: &Token,
        left: &[Token],
        right: &[Token],
        _cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        expect_empty(left)?;
        expect_empty(right)?;
        Ok(None)
    }
}

impl Parsable for If {
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
        expect_empty(left)?;
        let (cond, alors, rest) = split_at_keyword(right, Keyword::Si, Keyword::Alors, head.span)?;
        expect_empty(rest)?;
        let cond = expression(cond, alors.span, cx)?;
        Ok(Some(Node::new(head.clone(), vec![cond])))
    }
}

impl Parsable for Else {
    fn priority(&self) -> Priority {
        Priority::Statement
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

impl Parsable for While {
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
        expect_empty(left)?;
        let Some((que, after_que)) = right.split_first().filter(|(t, _)| t.is_keyword(Keyword::Que))
        else {
            return Err(ParseError::missing_keyword(
                head.span,
                Keyword::Tant,
                Keyword::Que,
            ));
        };
        let (cond, faire, rest) =
            split_at_keyword(after_que, Keyword::Tant, Keyword::Faire, que.span)?;
        expect_empty(rest)?;
        let cond = expression(cond, faire.span, cx)?;
        Ok(Some(Node::new(head.clone(), vec![cond])))
    }
}

impl Parsable for For {
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
        expect_empty(left)?;
        let (start, to, after_to) = split_at_keyword(right, Keyword::Pour, Keyword::A, head.span)?;
        let (end, faire, rest) = split_at_keyword(after_to, Keyword::Pour, Keyword::Faire, to.span)?;
        expect_empty(rest)?;

        let header_span = slice_span(start, head.span);
        let assign = match build_node(start, cx)? {
            Some(node) if node.head.operator() == Some(Operator::Assign) => node,
            _ => {
                return Err(ParseError::new(
                    header_span,
                    ParseErrorKind::InvalidLoopHeader {
                        reason: "expected `<variable> ← <start>` before `à`",
                    },
                ))
            }
        };
        let iterator = match assign.child(0) {
            Some(target) if target.children.is_empty() => target.clone(),
            _ => {
                return Err(ParseError::new(
                    header_span,
                    ParseErrorKind::InvalidLoopHeader {
                        reason: "the loop variable cannot be indexed",
                    },
                ))
            }
        };
        let end = expression(end, faire.span, cx)?;
        Ok(Some(Node::new(head.clone(), vec![iterator, assign, end])))
    }
}

impl Parsable for End {
    fn priority(&self) -> Priority {
        Priority::Statement
    }

    fn parse(
        &self,
        head: &Token,
        left: &[Token],
        right: &[Token],
        _cx: &mut ParseCx,
    ) -> ParseResult<Option<Node>> {
        expect_empty(left)?;
        let construct = match right {
            [] => return Ok(Some(Node::leaf(head.clone()))),
            [kw] if closes_block(kw) => kw,
            [kw, que] if kw.is_keyword(Keyword::Tant) && que.is_keyword(Keyword::Que) => kw,
            _ => {
                return Err(ParseError::new(
                    slice_span(right, head.span),
                    ParseErrorKind::InvalidBlockEnd,
                ))
            }
        };
        Ok(Some(Node::new(head.clone(), vec![Node::leaf(construct.clone())])))
    }
}
