//! Priority-driven AST builder for the algo pseudocode language.
//!
//! Each source line is one statement. A line's grouped tokens are rooted at
//! the token with the strictly highest [`Priority`](algo_ir::Priority)
//! (leftmost on ties), and that token's [`Parsable`] rule turns the tokens
//! on its left and right into children. Equal-priority operators therefore
//! always resolve left first: `10 - 2 - 3` is `10 - (2 - 3)` and
//! `a + b * c` is `(a + b) * c`.
//!
//! Lines without executable content (`Algorithme`, `Variables`, `Début`,
//! blank lines) are dropped; every other line becomes one [`Node`] of the
//! flat [`Program`].

mod context;
mod error;
mod grammar;
mod registry;

use algo_ir::{Node, Program, Token};
use tracing::debug;

pub use context::{build_node, ParseCx};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use registry::{parsable, priority_of, Parsable};

/// Parse one line's tokens (without its end-of-line marker).
pub fn parse_line(tokens: &[Token], cx: &mut ParseCx) -> ParseResult<Option<Node>> {
    build_node(tokens, cx)
}

/// Parse a file-level token stream, as produced by
/// [`algo_lexer::lex_source`], into a program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut cx = ParseCx::new();
    let mut nodes = Vec::new();
    for (index, line) in algo_lexer::split_lines(tokens).into_iter().enumerate() {
        let line_no = index + 1;
        match parse_line(line, &mut cx)? {
            Some(node) => {
                debug!(line = line_no, ip = nodes.len(), node = %node, "kept line");
                nodes.push(node);
            }
            None => debug!(line = line_no, "dropped line"),
        }
    }
    Ok(Program {
        name: cx.into_program_name(),
        nodes,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
