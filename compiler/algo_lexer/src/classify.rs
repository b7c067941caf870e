//! Word classification.
//!
//! Turns one word into one raw token. Order matters: quote delimiters first,
//! then (inside quotes) literal text, then keywords, type words, booleans,
//! operators, connectives, brackets, commas, numbers, and finally
//! identifiers.

use algo_ir::{
    Number, NumberLit, Separator, Span, StrLit, Token, TokenData, VarRef,
};

use crate::keywords::{self, is_quote, single_char};
use crate::split::Word;
use crate::{LexError, LexErrorKind};

/// Lexer state carried from one line to the next.
///
/// Scoped to one tokenization run: create a fresh state per source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexerState {
    /// Quote character of the string currently open, if any.
    quote: Option<(char, Span)>,
    /// 1-based number of the line being lexed.
    line: u32,
}

impl LexerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The quote character of the string currently open.
    pub fn open_quote(&self) -> Option<char> {
        self.quote.map(|(q, _)| q)
    }

    /// Span of the quote that opened the current string.
    pub(crate) fn open_quote_span(&self) -> Option<Span> {
        self.quote.map(|(_, span)| span)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn start_line(&mut self) {
        self.line += 1;
    }

    /// Forget an unterminated string after it has been reported.
    pub(crate) fn reset_quote(&mut self) {
        self.quote = None;
    }
}

/// Classify one word, updating the quote state.
pub(crate) fn classify(word: &Word<'_>, state: &mut LexerState) -> Result<Token, LexError> {
    let data = classify_data(word, state)?;
    Ok(Token::new(data, word.span))
}

fn classify_data(word: &Word<'_>, state: &mut LexerState) -> Result<TokenData, LexError> {
    let single = single_char(word.text);

    // (1) quote delimiter: opens, or closes the matching quote
    if let Some(q) = single.filter(|&c| is_quote(c)) {
        match state.quote {
            None => {
                state.quote = Some((q, word.span));
                return Ok(TokenData::Separator(Separator::Quote(q)));
            }
            Some((open, _)) if open == q => {
                state.quote = None;
                return Ok(TokenData::Separator(Separator::Quote(q)));
            }
            Some(_) => {}
        }
    }

    // (2) literal text inside quotes
    if let Some((quote, _)) = state.quote {
        return Ok(TokenData::String(StrLit {
            text: word.text.to_owned(),
            quote,
        }));
    }

    if let Some(kw) = keywords::keyword(word.text) {
        return Ok(TokenData::Keyword(kw));
    }
    if let Some(ty) = keywords::type_name(word.text) {
        return Ok(TokenData::Type(ty));
    }
    if let Some(b) = keywords::boolean(word.text) {
        return Ok(TokenData::Boolean(b));
    }
    if let Some(op) = single.and_then(keywords::operator) {
        return Ok(TokenData::Operator(op));
    }
    if let Some(op) = keywords::bool_op(word.text) {
        return Ok(TokenData::BooleanOperator(op));
    }
    if let Some(b) = single.and_then(keywords::bracket) {
        return Ok(TokenData::Parenthesis(b));
    }
    if single == Some(',') {
        return Ok(TokenData::Separator(Separator::Comma));
    }
    if let Some(value) = number(word)? {
        return Ok(TokenData::Number(Number {
            text: word.text.to_owned(),
            value,
        }));
    }
    Ok(TokenData::Variable(VarRef::scalar(word.text)))
}

/// Integer first; a decimal spelling (`3.14`) falls back to a real.
fn number(word: &Word<'_>) -> Result<Option<NumberLit>, LexError> {
    let text = word.text;
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<i64>()
            .map(|n| Some(NumberLit::Int(n)))
            .map_err(|_| LexError::new(word.span, LexErrorKind::IntegerOutOfRange));
    }
    let is_decimal = text.starts_with(|c: char| c.is_ascii_digit())
        && text.bytes().filter(|&b| b == b'.').count() == 1
        && text.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if is_decimal {
        if let Ok(x) = text.parse::<f64>() {
            return Ok(Some(NumberLit::Float(x)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_ir::{BoolOp, Bracket, Keyword, Operator, TypeName};
    use pretty_assertions::assert_eq;

    fn classify_all(line: &str) -> Vec<TokenData> {
        let mut state = LexerState::new();
        crate::split::split_words(line, 0)
            .iter()
            .map(|w| classify(w, &mut state).map(|t| t.data))
            .collect::<Result<_, _>>()
            .unwrap_or_default()
    }

    #[test]
    fn classification_order() {
        assert_eq!(
            classify_all("Si vrai ET x ≤ 3.5 alors"),
            vec![
                TokenData::Keyword(Keyword::Si),
                TokenData::Boolean(true),
                TokenData::BooleanOperator(BoolOp::Et),
                TokenData::Variable(VarRef::scalar("x")),
                TokenData::Operator(Operator::LtEq),
                TokenData::Number(Number {
                    text: "3.5".into(),
                    value: NumberLit::Float(3.5),
                }),
                TokenData::Keyword(Keyword::Alors),
            ]
        );
        assert_eq!(
            classify_all("t : tableau"),
            vec![
                TokenData::Variable(VarRef::scalar("t")),
                TokenData::Operator(Operator::Colon),
                TokenData::Type(TypeName::Tableau),
            ]
        );
        assert_eq!(
            classify_all("(,]"),
            vec![
                TokenData::Parenthesis(Bracket::OpenParen),
                TokenData::Separator(Separator::Comma),
                TokenData::Parenthesis(Bracket::CloseSquare),
            ]
        );
    }

    #[test]
    fn words_inside_quotes_are_text() {
        assert_eq!(
            classify_all("\"Si l'eau\""),
            vec![
                TokenData::Separator(Separator::Quote('"')),
                TokenData::String(StrLit {
                    text: "Si".into(),
                    quote: '"',
                }),
                TokenData::String(StrLit {
                    text: "l".into(),
                    quote: '"',
                }),
                TokenData::String(StrLit {
                    text: "'".into(),
                    quote: '"',
                }),
                TokenData::String(StrLit {
                    text: "eau".into(),
                    quote: '"',
                }),
                TokenData::Separator(Separator::Quote('"')),
            ]
        );
    }

    #[test]
    fn quote_state_tracks_open_string() {
        let mut state = LexerState::new();
        let words = crate::split::split_words("\"abc", 0);
        for word in &words {
            assert!(classify(word, &mut state).is_ok());
        }
        assert_eq!(state.open_quote(), Some('"'));
        assert_eq!(state.open_quote_span(), Some(Span::new(0, 1)));
    }

    #[test]
    fn integer_overflow_is_an_error() {
        let mut state = LexerState::new();
        let words = crate::split::split_words("99999999999999999999", 0);
        let err = classify(&words[0], &mut state);
        assert_eq!(
            err.map_err(|e| e.kind),
            Err(LexErrorKind::IntegerOutOfRange)
        );
    }

    #[test]
    fn malformed_numbers_are_identifiers() {
        assert_eq!(
            classify_all("1.2.3"),
            vec![TokenData::Variable(VarRef::scalar("1.2.3"))]
        );
    }
}
