//! Lexer for the algo pseudocode language.
//!
//! Source is lexed line by line:
//! 1. **Split**: whitespace separates words; every special character
//!    (operator, bracket, comma, quote) is a word of its own.
//! 2. **Classify**: each word becomes one raw token, in a fixed order
//!    (quote delimiter, quoted text, keyword, type word, boolean, operator,
//!    connective, bracket, comma, number, identifier).
//! 3. **Group**: tokens are folded into a [`LineBuilder`]; variants with a
//!    [`LexOverride`] restructure the line as they arrive (brackets open and
//!    close groups, quotes assemble strings, `<` `=` fuse into `<=`).
//!
//! Every line ends with an [`EndOfLine`](algo_ir::TokenData::EndOfLine)
//! marker so the file-level stream can be re-split with [`split_lines`].
//! Quote state is carried across lines in an explicit [`LexerState`]; a
//! string still open at end of line is an error.

mod builder;
mod classify;
mod keywords;
mod lex_error;
mod overrides;
mod split;

use algo_ir::{Span, Token, TokenKind};
use tracing::{debug, trace};

pub use builder::LineBuilder;
pub use classify::LexerState;
pub use lex_error::{LexError, LexErrorKind};
pub use overrides::{
    lex_override, CloseBracket, ComparisonFusion, LexOverride, OpenIndex, OpenParen,
    QuoteDelimiter, StringFragment,
};

/// Lex one source line (without its newline) whose first byte is at `base`.
///
/// Returns the line's grouped tokens followed by an end-of-line marker.
pub fn lex_line(line: &str, base: u32, state: &mut LexerState) -> Result<Vec<Token>, LexError> {
    state.start_line();
    let words = split::split_words(line, base);
    let mut builder = LineBuilder::new();

    for (i, word) in words.iter().enumerate() {
        if state.open_quote().is_none() && is_comment_start(word, words.get(i + 1)) {
            break;
        }
        let token = classify::classify(word, state)?;
        match lex_override(&token.data) {
            Some(rule) => {
                trace!(rule = rule.name(), word = word.text, "lex override");
                rule.apply(token, &mut builder)?;
            }
            None => builder.push(token),
        }
    }

    let end = base.saturating_add(u32::try_from(line.len()).unwrap_or(u32::MAX));
    let eol = Span::new(end, end);
    if let Some(quote) = state.open_quote() {
        let open = state.open_quote_span().unwrap_or(eol);
        state.reset_quote();
        return Err(LexError::new(
            open.merge(eol),
            LexErrorKind::UnterminatedString { quote },
        ));
    }
    let tokens = builder.finish(eol)?;
    debug!(line = state.line(), tokens = tokens.len() - 1, "lexed line");
    Ok(tokens)
}

fn is_comment_start(word: &split::Word<'_>, next: Option<&split::Word<'_>>) -> bool {
    word.text == "/" && next.is_some_and(|n| n.text == "/" && word.touches(n))
}

/// Lex a whole source file into one flat stream of per-line token runs,
/// each terminated by an end-of-line marker.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lex_source(source: &str) -> Result<Vec<Token>, LexError> {
    let mut state = LexerState::new();
    let mut tokens = Vec::new();
    let mut offset = 0usize;
    for raw in source.split_inclusive('\n') {
        let content = raw.trim_end_matches(['\n', '\r']);
        let base = u32::try_from(offset).unwrap_or(u32::MAX);
        tokens.extend(lex_line(content, base, &mut state)?);
        offset += raw.len();
    }
    debug!(lines = state.line(), tokens = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Split a file-level stream back into one slice per source line, with the
/// end-of-line markers removed. Line `n` (1-based) is element `n - 1`.
pub fn split_lines(tokens: &[Token]) -> Vec<&[Token]> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if token.kind() == TokenKind::EndOfLine {
            lines.push(&tokens[start..i]);
            start = i + 1;
        }
    }
    if start < tokens.len() {
        lines.push(&tokens[start..]);
    }
    lines
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
