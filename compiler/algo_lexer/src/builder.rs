//! Per-line token grouping.
//!
//! [`LineBuilder`] receives classified tokens in order and assembles the
//! line's grouped token tree. Bracketed and quoted spans are collected into
//! frames as they open and folded into their parent when they close:
//! `(` yields a [`Group`] (or the argument list of a [`FunctionCall`] when it
//! follows a bare identifier), `[` yields one dimension of the preceding
//! variable, and a quoted span yields one string token.
//!
//! The builder only offers the primitives. Which token triggers which
//! primitive is decided by the [`LexOverride`](crate::LexOverride) registry.

use smallvec::SmallVec;

use algo_ir::{
    Bracket, FunctionCall, Group, GroupDelim, Span, StrLit, Token, TokenData,
};

use crate::{LexError, LexErrorKind};

#[derive(Debug)]
enum FrameKind {
    Root,
    Group,
    Call { name: String, name_span: Span },
    Index,
}

impl FrameKind {
    fn open_char(&self) -> char {
        match self {
            FrameKind::Root | FrameKind::Group | FrameKind::Call { .. } => '(',
            FrameKind::Index => '[',
        }
    }
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    /// Span of the opening bracket.
    open: Span,
    tokens: Vec<Token>,
}

#[derive(Debug)]
struct OpenString {
    quote: char,
    span: Span,
    text: String,
    last_end: u32,
}

/// Assembles one line's grouped token tree.
#[derive(Debug)]
pub struct LineBuilder {
    /// `frames[0]` is the root of the line.
    frames: SmallVec<[Frame; 4]>,
    string: Option<OpenString>,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuilder {
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(Frame {
            kind: FrameKind::Root,
            open: Span::DUMMY,
            tokens: Vec::new(),
        });
        LineBuilder {
            frames,
            string: None,
        }
    }

    fn current(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Append a token to the innermost open frame.
    pub fn push(&mut self, token: Token) {
        self.current().tokens.push(token);
    }

    /// Last token of the innermost open frame.
    pub fn last(&self) -> Option<&Token> {
        self.frames.last().and_then(|f| f.tokens.last())
    }

    pub fn last_mut(&mut self) -> Option<&mut Token> {
        self.current().tokens.last_mut()
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.current().tokens.pop()
    }

    /// Open a parenthesized sub-expression.
    pub fn open_group(&mut self, open: Span) {
        self.frames.push(Frame {
            kind: FrameKind::Group,
            open,
            tokens: Vec::new(),
        });
    }

    /// Open the argument list of a call to `name`.
    pub fn open_call(&mut self, name: String, name_span: Span, open: Span) {
        self.frames.push(Frame {
            kind: FrameKind::Call { name, name_span },
            open,
            tokens: Vec::new(),
        });
    }

    /// Open one index dimension of the variable just pushed.
    pub fn open_index(&mut self, open: Span) -> Result<(), LexError> {
        if !matches!(self.last().map(|t| &t.data), Some(TokenData::Variable(_))) {
            return Err(LexError::new(open, LexErrorKind::IndexWithoutVariable));
        }
        self.frames.push(Frame {
            kind: FrameKind::Index,
            open,
            tokens: Vec::new(),
        });
        Ok(())
    }

    /// Close the innermost frame with `found`.
    pub fn close(&mut self, found: Bracket, close: Span) -> Result<(), LexError> {
        let found_char = found.as_char();
        if self.frames.len() == 1 {
            return Err(LexError::new(
                close,
                LexErrorKind::UnexpectedClosingDelimiter { found: found_char },
            ));
        }
        let expects_square = matches!(self.frames.last().map(|f| &f.kind), Some(FrameKind::Index));
        let is_square = found == Bracket::CloseSquare;
        if expects_square != is_square {
            let open = self.frames.last().map_or('(', |f| f.kind.open_char());
            return Err(LexError::new(
                close,
                LexErrorKind::MismatchedDelimiter {
                    open,
                    found: found_char,
                },
            ));
        }
        let Some(frame) = self.frames.pop() else {
            return Err(LexError::new(
                close,
                LexErrorKind::UnexpectedClosingDelimiter { found: found_char },
            ));
        };

        let span = frame.open.merge(close);
        match frame.kind {
            FrameKind::Group => {
                let group = Group {
                    delim: GroupDelim::Paren,
                    tokens: frame.tokens,
                    span,
                };
                self.push(Token::new(TokenData::Group(group), span));
            }
            FrameKind::Call { name, name_span } => {
                let args = Group {
                    delim: GroupDelim::Paren,
                    tokens: frame.tokens,
                    span,
                };
                self.push(Token::new(
                    TokenData::Function(FunctionCall { name, args }),
                    name_span.merge(close),
                ));
            }
            FrameKind::Index => {
                let dim = Group {
                    delim: GroupDelim::Square,
                    tokens: frame.tokens,
                    span,
                };
                match self.last_mut() {
                    Some(Token {
                        data: TokenData::Variable(var),
                        span: var_span,
                    }) => {
                        var.dims.push(dim);
                        *var_span = var_span.merge(close);
                    }
                    _ => {
                        return Err(LexError::new(
                            frame.open,
                            LexErrorKind::IndexWithoutVariable,
                        ))
                    }
                }
            }
            FrameKind::Root => {}
        }
        Ok(())
    }

    pub fn in_string(&self) -> bool {
        self.string.is_some()
    }

    pub fn open_string(&mut self, quote: char, open: Span) {
        self.string = Some(OpenString {
            quote,
            span: open,
            text: String::new(),
            last_end: open.end,
        });
    }

    /// Add one word of quoted text.
    ///
    /// A fragment that touches the previous one in the source is joined
    /// directly; otherwise one space separates them.
    pub fn push_fragment(&mut self, text: &str, span: Span) {
        if let Some(open) = &mut self.string {
            if !open.text.is_empty() && open.last_end != span.start {
                open.text.push(' ');
            }
            open.text.push_str(text);
            open.last_end = span.end;
        }
    }

    pub fn close_string(&mut self, close: Span) {
        if let Some(open) = self.string.take() {
            let span = open.span.merge(close);
            self.push(Token::new(
                TokenData::String(StrLit {
                    text: open.text,
                    quote: open.quote,
                }),
                span,
            ));
        }
    }

    /// Finish the line, appending its end-of-line marker.
    pub fn finish(mut self, eol: Span) -> Result<Vec<Token>, LexError> {
        if let Some(open) = &self.string {
            return Err(LexError::new(
                open.span.merge(eol),
                LexErrorKind::UnterminatedString { quote: open.quote },
            ));
        }
        if self.frames.len() > 1 {
            let frame = &self.frames[self.frames.len() - 1];
            return Err(LexError::new(
                frame.open,
                LexErrorKind::UnclosedDelimiter {
                    open: frame.kind.open_char(),
                },
            ));
        }
        let mut tokens = self
            .frames
            .pop()
            .map(|root| root.tokens)
            .unwrap_or_default();
        tokens.push(Token::new(TokenData::EndOfLine, eol));
        Ok(tokens)
    }
}
