//! Reconstruction of the visible (non-whitespace) text of a token tree.

use crate::{Group, GroupDelim, Token, TokenData};

/// Rebuild the source text covered by `tokens` with all whitespace dropped.
///
/// Atomic tokens are read back from `source` through their spans, so the
/// original spelling (keyword case, `≤` versus `<=`) is preserved. Structural
/// tokens (groups, calls, indexed variables, strings) are rendered from the
/// tree. Comparing the result against the source with whitespace stripped
/// checks that grouping lost and duplicated nothing.
pub fn visible_text(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len());
    for token in tokens {
        push_token(&mut out, source, token);
    }
    out
}

fn push_token(out: &mut String, source: &str, token: &Token) {
    match &token.data {
        TokenData::EndOfLine => {}
        TokenData::Group(group) => push_group(out, source, group),
        TokenData::Function(call) => {
            out.push_str(&call.name);
            push_group(out, source, &call.args);
        }
        TokenData::Variable(var) => {
            out.push_str(&var.name);
            for dim in &var.dims {
                push_group(out, source, dim);
            }
        }
        TokenData::String(lit) => {
            out.push(lit.quote);
            out.extend(lit.text.chars().filter(|c| !c.is_whitespace()));
            out.push(lit.quote);
        }
        // Fused operators (`< =`) may span whitespace.
        _ => match source.get(token.span.to_range()) {
            Some(text) => out.extend(text.chars().filter(|c| !c.is_whitespace())),
            None => out.push_str(&token.data.to_string()),
        },
    }
}

fn push_group(out: &mut String, source: &str, group: &Group) {
    let (open, close) = match group.delim {
        GroupDelim::Paren => ('(', ')'),
        GroupDelim::Square => ('[', ']'),
    };
    out.push(open);
    for token in &group.tokens {
        push_token(out, source, token);
    }
    out.push(close);
}
