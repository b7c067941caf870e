//! Block matching over the flat program.
//!
//! Block bodies are ordinary program lines, so the engine finds the `Sinon`
//! and `Fin <kw>` belonging to a construct by scanning forward with a depth
//! counter. Results are cached per opening address.

use algo_ir::{Keyword, Node};
use tracing::trace;

use super::Interpreter;
use crate::errors::{unmatched_block, EvalResult};

/// Addresses of the lines that delimit one block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The `Sinon` of an `if`, when it has one.
    pub else_ip: Option<usize>,
    /// The matching `Fin <kw>`.
    pub end_ip: usize,
}

enum Role {
    Open,
    Else,
    Close(Keyword),
    Other,
}

fn role(node: &Node) -> Role {
    match node.head.keyword() {
        Some(Keyword::Si | Keyword::Tant | Keyword::Pour) => Role::Open,
        Some(Keyword::Sinon) => Role::Else,
        Some(Keyword::Fin) => match node.child(0).and_then(|c| c.head.keyword()) {
            Some(kw) => Role::Close(kw),
            None => Role::Other,
        },
        _ => Role::Other,
    }
}

impl Interpreter<'_> {
    /// Delimiters of the `construct` block opened at `start`.
    pub fn block(&mut self, start: usize, construct: Keyword) -> EvalResult<Block> {
        if let Some(block) = self.blocks.get(&start) {
            return Ok(*block);
        }
        let block = scan(&self.program.nodes, start, construct)?;
        trace!(start, ?block, "block matched");
        self.blocks.insert(start, block);
        Ok(block)
    }
}

fn scan(nodes: &[Node], start: usize, construct: Keyword) -> EvalResult<Block> {
    let mut depth = 0usize;
    let mut else_ip = None;
    for (ip, node) in nodes.iter().enumerate().skip(start + 1) {
        match role(node) {
            Role::Open => depth += 1,
            Role::Else if depth == 0 && construct == Keyword::Si && else_ip.is_none() => {
                else_ip = Some(ip);
            }
            Role::Close(kw) if depth == 0 => {
                if kw != construct {
                    return Err(unmatched_block(construct.as_str()));
                }
                return Ok(Block {
                    else_ip,
                    end_ip: ip,
                });
            }
            Role::Close(_) => depth -= 1,
            Role::Else | Role::Other => {}
        }
    }
    Err(unmatched_block(construct.as_str()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use algo_ir::{Span, Token, TokenData};
    use pretty_assertions::assert_eq;

    fn kw(k: Keyword) -> Token {
        Token::new(TokenData::Keyword(k), Span::DUMMY)
    }

    fn open(k: Keyword) -> Node {
        Node::leaf(kw(k))
    }

    fn close(k: Keyword) -> Node {
        Node::new(kw(Keyword::Fin), vec![Node::leaf(kw(k))])
    }

    #[test]
    fn nested_blocks_are_skipped() {
        let nodes = vec![
            open(Keyword::Si),
            open(Keyword::Tant),
            open(Keyword::Sinon),
            close(Keyword::Tant),
            open(Keyword::Sinon),
            close(Keyword::Si),
        ];
        assert_eq!(
            scan(&nodes, 0, Keyword::Si).unwrap(),
            Block {
                else_ip: Some(4),
                end_ip: 5
            }
        );
    }

    #[test]
    fn loops_ignore_else() {
        let nodes = vec![open(Keyword::Tant), open(Keyword::Sinon), close(Keyword::Tant)];
        assert_eq!(
            scan(&nodes, 0, Keyword::Tant).unwrap(),
            Block {
                else_ip: None,
                end_ip: 2
            }
        );
    }

    #[test]
    fn wrong_or_missing_end() {
        let nodes = vec![open(Keyword::Pour), close(Keyword::Si)];
        assert_eq!(
            scan(&nodes, 0, Keyword::Pour).unwrap_err().kind,
            crate::EvalErrorKind::UnmatchedBlock { construct: "Pour" }
        );
        let nodes = vec![open(Keyword::Si), open(Keyword::Si), close(Keyword::Si)];
        assert!(scan(&nodes, 0, Keyword::Si).is_err());
    }
}
