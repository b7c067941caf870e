//! Word tables: keywords, type words, literals and special characters.
//!
//! Keywords, type words and boolean literals match case-insensitively
//! (`Début`, `début`, `DÉBUT`). The boolean connectives `ET`/`OU` only match
//! in upper case so that `et`/`ou` stay usable as identifiers.

use algo_ir::{BoolOp, Bracket, Keyword, Operator, TypeName};

/// Characters that always form a word of their own.
#[inline]
pub(crate) fn is_special(c: char) -> bool {
    operator(c).is_some() || bracket(c).is_some() || c == ',' || is_quote(c)
}

#[inline]
pub(crate) fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

pub(crate) fn keyword(word: &str) -> Option<Keyword> {
    let lower = word.to_lowercase();
    let kw = match lower.as_str() {
        "algorithme" => Keyword::Algorithme,
        "variables" | "variable" => Keyword::Variables,
        "début" | "debut" => Keyword::Debut,
        "fin" => Keyword::Fin,
        "si" => Keyword::Si,
        "alors" => Keyword::Alors,
        "sinon" => Keyword::Sinon,
        "tant" => Keyword::Tant,
        "que" => Keyword::Que,
        "faire" => Keyword::Faire,
        "pour" => Keyword::Pour,
        "à" => Keyword::A,
        "de" => Keyword::De,
        _ => return None,
    };
    Some(kw)
}

pub(crate) fn type_name(word: &str) -> Option<TypeName> {
    let lower = word.to_lowercase();
    let ty = match lower.as_str() {
        "entier" => TypeName::Entier,
        "réel" | "reel" => TypeName::Reel,
        "booléen" | "booleen" => TypeName::Booleen,
        "caractère" | "caractere" | "caractères" | "caracteres" => TypeName::Caractere,
        "chaîne" | "chaine" => TypeName::Chaine,
        "tableau" => TypeName::Tableau,
        _ => return None,
    };
    Some(ty)
}

pub(crate) fn boolean(word: &str) -> Option<bool> {
    match word.to_lowercase().as_str() {
        "vrai" => Some(true),
        "faux" => Some(false),
        _ => None,
    }
}

pub(crate) fn operator(c: char) -> Option<Operator> {
    let op = match c {
        '+' => Operator::Plus,
        '-' => Operator::Minus,
        '*' => Operator::Star,
        '/' => Operator::Slash,
        '=' => Operator::Eq,
        '<' => Operator::Lt,
        '>' => Operator::Gt,
        '≤' => Operator::LtEq,
        '≥' => Operator::GtEq,
        '≠' => Operator::NotEq,
        '←' => Operator::Assign,
        ':' => Operator::Colon,
        _ => return None,
    };
    Some(op)
}

pub(crate) fn bool_op(word: &str) -> Option<BoolOp> {
    match word {
        "ET" => Some(BoolOp::Et),
        "OU" => Some(BoolOp::Ou),
        _ => None,
    }
}

pub(crate) fn bracket(c: char) -> Option<Bracket> {
    match c {
        '(' => Some(Bracket::OpenParen),
        ')' => Some(Bracket::CloseParen),
        '[' => Some(Bracket::OpenSquare),
        ']' => Some(Bracket::CloseSquare),
        _ => None,
    }
}

/// A single character of the word, if it has exactly one.
#[inline]
pub(crate) fn single_char(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
