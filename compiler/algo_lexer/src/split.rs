//! Word splitting.
//!
//! A line is cut on whitespace, and every special character (operator,
//! bracket, comma, quote) becomes a word of its own: `t[i]←a+1` splits into
//! `t`, `[`, `i`, `]`, `←`, `a`, `+`, `1`.

use algo_ir::Span;

use crate::keywords::is_special;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Word<'a> {
    pub text: &'a str,
    /// Absolute byte range in the source file.
    pub span: Span,
}

impl Word<'_> {
    /// Whether `next` starts exactly where this word ends.
    #[inline]
    pub fn touches(&self, next: &Word<'_>) -> bool {
        self.span.end == next.span.start
    }
}

/// Split one line (without its newline) whose first byte sits at `base`.
pub(crate) fn split_words(line: &str, base: u32) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(from) = start.take() {
                push_word(&mut words, line, base, from, i);
            }
        } else if is_special(c) {
            if let Some(from) = start.take() {
                push_word(&mut words, line, base, from, i);
            }
            push_word(&mut words, line, base, i, i + c.len_utf8());
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(from) = start {
        push_word(&mut words, line, base, from, line.len());
    }
    words
}

fn push_word<'a>(words: &mut Vec<Word<'a>>, line: &'a str, base: u32, from: usize, to: usize) {
    let offset = base as usize;
    if let Some(text) = line.get(from..to) {
        words.push(Word {
            text,
            span: Span::from_range(offset + from..offset + to),
        });
    }
}
