//! Lexing overrides.
//!
//! Most tokens are appended to the current frame as they are classified.
//! A token whose variant needs special handling (bracket grouping, string
//! assembly, comparison fusion) provides a [`LexOverride`], found through
//! [`lex_override`]. Adding such a rule means adding one implementation and
//! one registry arm; the line loop never changes.

use algo_ir::{Bracket, Operator, Separator, Token, TokenData};

use crate::{LexError, LineBuilder};

/// Custom post-classification handling for one token variant.
pub trait LexOverride: Sync {
    /// Short name for tracing.
    fn name(&self) -> &'static str;

    /// Fold `token` into the line under construction.
    fn apply(&self, token: Token, line: &mut LineBuilder) -> Result<(), LexError>;
}

/// `(`: opens a call after a bare identifier, a group otherwise.
pub struct OpenParen;

/// `[`: opens a dimension of the preceding variable.
pub struct OpenIndex;

/// `)` and `]`.
pub struct CloseBracket;

/// `"` and `'`: open or close a string.
pub struct QuoteDelimiter;

/// One word of quoted text.
pub struct StringFragment;

/// `=` or `>` after `<`/`>` fuses into `<=`, `>=` or `<>`.
pub struct ComparisonFusion;

static OPEN_PAREN: OpenParen = OpenParen;
static OPEN_INDEX: OpenIndex = OpenIndex;
static CLOSE_BRACKET: CloseBracket = CloseBracket;
static QUOTE_DELIMITER: QuoteDelimiter = QuoteDelimiter;
static STRING_FRAGMENT: StringFragment = StringFragment;
static COMPARISON_FUSION: ComparisonFusion = ComparisonFusion;

/// Look up the override for a token, if its variant has one.
pub fn lex_override(data: &TokenData) -> Option<&'static dyn LexOverride> {
    match data {
        TokenData::Parenthesis(Bracket::OpenParen) => Some(&OPEN_PAREN),
        TokenData::Parenthesis(Bracket::OpenSquare) => Some(&OPEN_INDEX),
        TokenData::Parenthesis(Bracket::CloseParen | Bracket::CloseSquare) => Some(&CLOSE_BRACKET),
        TokenData::Separator(Separator::Quote(_)) => Some(&QUOTE_DELIMITER),
        TokenData::String(_) => Some(&STRING_FRAGMENT),
        TokenData::Operator(Operator::Eq | Operator::Gt) => Some(&COMPARISON_FUSION),
        _ => None,
    }
}

impl LexOverride for OpenParen {
    fn name(&self) -> &'static str {
        "open-paren"
    }

    fn apply(&self, token: Token, line: &mut LineBuilder) -> Result<(), LexError> {
        let is_callee = matches!(
            line.last().map(|t| &t.data),
            Some(TokenData::Variable(var)) if var.is_scalar()
        );
        if is_callee {
            if let Some(Token {
                data: TokenData::Variable(var),
                span,
            }) = line.pop()
            {
                line.open_call(var.name, span, token.span);
                return Ok(());
            }
        }
        line.open_group(token.span);
        Ok(())
    }
}

impl LexOverride for OpenIndex {
    fn name(&self) -> &'static str {
        "open-index"
    }

    fn apply(&self, token: Token, line: &mut LineBuilder) -> Result<(), LexError> {
        line.open_index(token.span)
    }
}

impl LexOverride for CloseBracket {
    fn name(&self) -> &'static str {
        "close-bracket"
    }

    fn apply(&self, token: Token, line: &mut LineBuilder) -> Result<(), LexError> {
        match token.data {
            TokenData::Parenthesis(bracket) => line.close(bracket, token.span),
            _ => {
                line.push(token);
                Ok(())
            }
        }
    }
}

impl LexOverride for QuoteDelimiter {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn apply(&self, token: Token, line: &mut LineBuilder) -> Result<(), LexError> {
        match token.data {
            TokenData::Separator(Separator::Quote(_)) if line.in_string() => {
                line.close_string(token.span);
            }
            TokenData::Separator(Separator::Quote(q)) => line.open_string(q, token.span),
            _ => line.push(token),
        }
        Ok(())
    }
}

impl LexOverride for StringFragment {
    fn name(&self) -> &'static str {
        "string-fragment"
    }

    fn apply(&self, token: Token, line: &mut LineBuilder) -> Result<(), LexError> {
        match &token.data {
            TokenData::String(lit) if line.in_string() => {
                line.push_fragment(&lit.text, token.span);
            }
            _ => line.push(token),
        }
        Ok(())
    }
}

impl LexOverride for ComparisonFusion {
    fn name(&self) -> &'static str {
        "comparison-fusion"
    }

    fn apply(&self, token: Token, line: &mut LineBuilder) -> Result<(), LexError> {
        let TokenData::Operator(second) = token.data else {
            line.push(token);
            return Ok(());
        };
        if let Some(prev) = line.last_mut() {
            if let TokenData::Operator(first) = prev.data {
                let fused = match (first, second) {
                    (Operator::Lt, Operator::Eq) => Some(Operator::LtEq),
                    (Operator::Gt, Operator::Eq) => Some(Operator::GtEq),
                    (Operator::Lt, Operator::Gt) => Some(Operator::NotEq),
                    _ => None,
                };
                if let Some(op) = fused {
                    prev.data = TokenData::Operator(op);
                    prev.span = prev.span.merge(token.span);
                    return Ok(());
                }
            }
        }
        line.push(token);
        Ok(())
    }
}
