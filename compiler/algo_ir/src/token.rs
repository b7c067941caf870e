//! Token model.
//!
//! A [`Token`] is a tagged value ([`TokenData`]) plus its [`Span`]. The tag
//! set is closed and small: keywords, type words, literals, operators,
//! separators, brackets, and the two structural variants produced by the
//! lexer's grouping pass (`Group` and `Function`).
//!
//! Tokens are pure data. Whether a token can head an AST node, how it
//! executes, and whether it rewrites the lexer output are capabilities
//! looked up in the per-phase registries, keyed by the token's data.

use std::fmt;

use crate::Span;

/// Coarse token category.
///
/// One entry per data-model kind; `TokenData::kind` maps every payload onto
/// exactly one of these.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Keyword,
    Variable,
    Type,
    Number,
    Operator,
    Group,
    Separator,
    EndOfLine,
    String,
    Parenthesis,
    Function,
    Boolean,
    BooleanOperator,
}

/// Parse priority of a token that can head a node.
///
/// The AST builder roots each slice at the token with the strictly highest
/// priority, leftmost on ties. The ordering is the derive order below.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Priority {
    /// Literals, variables and calls.
    Lowest,
    /// `+`, `-`.
    Additive,
    /// `*`, `/`.
    Multiplicative,
    /// Comparisons and `ET`/`OU`.
    Connective,
    /// Statement heads, `←`, `:` and block keywords.
    Statement,
}

/// Reserved words, matched case-insensitively.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Algorithme,
    Variables,
    Debut,
    Fin,
    Si,
    Alors,
    Sinon,
    Tant,
    Que,
    Faire,
    Pour,
    A,
    De,
}

impl Keyword {
    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Algorithme => "Algorithme",
            Keyword::Variables => "Variables",
            Keyword::Debut => "Début",
            Keyword::Fin => "Fin",
            Keyword::Si => "Si",
            Keyword::Alors => "alors",
            Keyword::Sinon => "Sinon",
            Keyword::Tant => "Tant",
            Keyword::Que => "que",
            Keyword::Faire => "faire",
            Keyword::Pour => "Pour",
            Keyword::A => "à",
            Keyword::De => "de",
        }
    }
}

/// Words of a type descriptor (`entier`, `tableau de réel`, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeName {
    Entier,
    Reel,
    Booleen,
    Caractere,
    Chaine,
    Tableau,
}

impl TypeName {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Entier => "entier",
            TypeName::Reel => "réel",
            TypeName::Booleen => "booléen",
            TypeName::Caractere => "caractère",
            TypeName::Chaine => "chaîne",
            TypeName::Tableau => "tableau",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// `←`
    Assign,
    /// `:` in a declaration.
    Colon,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Assign => "←",
            Operator::Colon => ":",
        }
    }
}

/// `ET` / `OU`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BoolOp {
    Et,
    Ou,
}

impl BoolOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BoolOp::Et => "ET",
            BoolOp::Ou => "OU",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Separator {
    Comma,
    /// A `"` or `'` delimiter. Only present between classification and the
    /// grouping pass; grouped output carries `String` tokens instead.
    Quote(char),
}

/// Raw bracket token. Consumed by the grouping pass.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Bracket {
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
}

impl Bracket {
    pub fn as_char(self) -> char {
        match self {
            Bracket::OpenParen => '(',
            Bracket::CloseParen => ')',
            Bracket::OpenSquare => '[',
            Bracket::CloseSquare => ']',
        }
    }
}

/// Value of a numeric literal.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum NumberLit {
    Int(i64),
    Float(f64),
}

/// Numeric literal with its source spelling.
#[derive(Clone, PartialEq, Debug)]
pub struct Number {
    pub text: String,
    pub value: NumberLit,
}

/// Quoted literal text and the quote character that delimited it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StrLit {
    pub text: String,
    pub quote: char,
}

impl StrLit {
    /// A single-quoted literal of exactly one character is a character
    /// literal; everything else is a string.
    pub fn as_char(&self) -> Option<char> {
        if self.quote != '\'' {
            return None;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GroupDelim {
    Paren,
    Square,
}

/// An ordered token sequence produced by a matched bracket pair.
#[derive(Clone, PartialEq, Debug)]
pub struct Group {
    pub delim: GroupDelim,
    pub tokens: Vec<Token>,
    /// From the opening to the closing bracket, inclusive.
    pub span: Span,
}

/// A variable reference: a name plus zero or more `[...]` dimension groups.
#[derive(Clone, PartialEq, Debug)]
pub struct VarRef {
    pub name: String,
    pub dims: Vec<Group>,
}

impl VarRef {
    pub fn scalar(name: impl Into<String>) -> Self {
        VarRef {
            name: name.into(),
            dims: Vec::new(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }
}

/// A call: the identifier that preceded `(` and the argument group.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionCall {
    pub name: String,
    pub args: Group,
}

#[derive(Clone, PartialEq, Debug)]
pub enum TokenData {
    Keyword(Keyword),
    Variable(VarRef),
    Type(TypeName),
    Number(Number),
    Operator(Operator),
    Group(Group),
    Separator(Separator),
    EndOfLine,
    String(StrLit),
    Parenthesis(Bracket),
    Function(FunctionCall),
    Boolean(bool),
    BooleanOperator(BoolOp),
}

impl TokenData {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenData::Keyword(_) => TokenKind::Keyword,
            TokenData::Variable(_) => TokenKind::Variable,
            TokenData::Type(_) => TokenKind::Type,
            TokenData::Number(_) => TokenKind::Number,
            TokenData::Operator(_) => TokenKind::Operator,
            TokenData::Group(_) => TokenKind::Group,
            TokenData::Separator(_) => TokenKind::Separator,
            TokenData::EndOfLine => TokenKind::EndOfLine,
            TokenData::String(_) => TokenKind::String,
            TokenData::Parenthesis(_) => TokenKind::Parenthesis,
            TokenData::Function(_) => TokenKind::Function,
            TokenData::Boolean(_) => TokenKind::Boolean,
            TokenData::BooleanOperator(_) => TokenKind::BooleanOperator,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub data: TokenData,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(data: TokenData, span: Span) -> Self {
        Token { data, span }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.data.kind()
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.data {
            TokenData::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.data {
            TokenData::Operator(op) => Some(op),
            _ => None,
        }
    }

    pub fn is_comma(&self) -> bool {
        matches!(self.data, TokenData::Separator(Separator::Comma))
    }

    pub fn as_var(&self) -> Option<&VarRef> {
        match &self.data {
            TokenData::Variable(var) => Some(var),
            _ => None,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.delim {
            GroupDelim::Paren => ('(', ')'),
            GroupDelim::Square => ('[', ']'),
        };
        write!(f, "{open}")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        write!(f, "{close}")
    }
}

impl fmt::Display for TokenData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenData::Keyword(kw) => f.write_str(kw.as_str()),
            TokenData::Variable(var) => {
                f.write_str(&var.name)?;
                for dim in &var.dims {
                    write!(f, "{dim}")?;
                }
                Ok(())
            }
            TokenData::Type(ty) => f.write_str(ty.as_str()),
            TokenData::Number(n) => f.write_str(&n.text),
            TokenData::Operator(op) => f.write_str(op.as_str()),
            TokenData::Group(group) => write!(f, "{group}"),
            TokenData::Separator(Separator::Comma) => f.write_str(","),
            TokenData::Separator(Separator::Quote(q)) => write!(f, "{q}"),
            TokenData::EndOfLine => Ok(()),
            TokenData::String(s) => write!(f, "{q}{}{q}", s.text, q = s.quote),
            TokenData::Parenthesis(b) => write!(f, "{}", b.as_char()),
            TokenData::Function(call) => write!(f, "{}{}", call.name, call.args),
            TokenData::Boolean(true) => f.write_str("vrai"),
            TokenData::Boolean(false) => f.write_str("faux"),
            TokenData::BooleanOperator(op) => f.write_str(op.as_str()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
